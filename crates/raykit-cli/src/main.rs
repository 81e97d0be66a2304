//! raykit CLI - ray-triangle intersection demo
//!
//! Runs the intersection kernel on a triangle and ray given on the
//! command line (or the built-in reference scenario) and prints the
//! result to standard output.

use anyhow::Result;
use clap::Parser;
use raykit_kernel_math::Vec3;
use raykit_kernel_raytrace::{intersect_triangle, Ray, Triangle};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "raykit")]
#[command(about = "Intersect a ray with a triangle", long_about = None)]
struct Cli {
    /// First triangle vertex as `x,y,z`
    #[arg(long, value_parser = parse_vec3, default_value = "0,0,0")]
    v0: Vec3,

    /// Second triangle vertex as `x,y,z`
    #[arg(long, value_parser = parse_vec3, default_value = "1,1,0")]
    v1: Vec3,

    /// Third triangle vertex as `x,y,z`
    #[arg(long, value_parser = parse_vec3, default_value = "1,-1,0")]
    v2: Vec3,

    /// Ray origin as `x,y,z`
    #[arg(long, value_parser = parse_vec3, default_value = "0.5,0,-0.6")]
    origin: Vec3,

    /// Ray direction as `x,y,z` (need not be unit length)
    #[arg(long, value_parser = parse_vec3, default_value = "0,0,1")]
    direction: Vec3,

    /// Emit the result as JSON instead of the text rendering
    #[arg(long)]
    json: bool,
}

/// Parse a comma-separated `x,y,z` triple.
fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected `x,y,z`, got `{s}`"));
    }
    let coord = |i: usize| -> Result<f32, String> {
        parts[i]
            .trim()
            .parse::<f32>()
            .map_err(|e| format!("bad coordinate `{}`: {e}", parts[i]))
    };
    Ok(Vec3::new(coord(0)?, coord(1)?, coord(2)?))
}

/// JSON report for `--json` output.
#[derive(Serialize)]
struct Report {
    hit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    point: Option<Vec3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<f32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let triangle = Triangle::new(cli.v0, cli.v1, cli.v2);
    let ray = Ray::new(cli.origin, cli.direction);
    let hit = intersect_triangle(&ray, &triangle);

    if cli.json {
        let report = Report {
            hit: hit.is_some(),
            point: hit.map(|h| h.point),
            distance: hit.map(|h| (h.point - ray.origin).length()),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=========================================");
    println!("Triangle Ray intersection example");
    println!("=========================================");
    println!(
        "Ray:          ( origin = {}, direction = {} )",
        ray.origin, ray.direction
    );
    println!("and triangle: {triangle}");

    match hit {
        Some(hit) => {
            println!("intersect at: {}", hit.point);
            let distance = (ray.origin - hit.point).length();
            println!(
                "The distance between ray origin and the intersection point: {distance:.8}"
            );
        }
        None => println!("no intersection"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vec3() {
        let v = parse_vec3("0.5, 0, -0.6").unwrap();
        assert!(v.approx_eq(Vec3::new(0.5, 0.0, -0.6)));
    }

    #[test]
    fn test_parse_vec3_rejects_bad_input() {
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("a,b,c").is_err());
    }

    #[test]
    fn test_default_scenario_hits() {
        let cli = Cli::parse_from(["raykit"]);
        let triangle = Triangle::new(cli.v0, cli.v1, cli.v2);
        let ray = Ray::new(cli.origin, cli.direction);
        let hit = intersect_triangle(&ray, &triangle).unwrap();
        assert!(hit.point.approx_eq(Vec3::new(0.5, 0.0, 0.0)));
    }
}
