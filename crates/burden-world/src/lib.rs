//! World queries for BURDEN.
//!
//! Provides the ray-cast capability consumed by the line-of-sight gate:
//! tagged circle colliders and an occlusion map of static obstacles.

pub mod raycast;

pub use raycast::{cast_ray, Collider, OcclusionMap, RayHit};
