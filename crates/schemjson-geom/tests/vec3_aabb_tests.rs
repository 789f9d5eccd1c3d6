use schemjson_geom::{Aabb, Vec3};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

#[test]
fn vec3_constants() {
    assert!(vec3_approx_eq(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.0), 1e-6));
    assert!(vec3_approx_eq(Vec3::ONE, Vec3::new(1.0, 1.0, 1.0), 1e-6));
}

#[test]
fn vec3_add_sub() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-4.0, 5.0, -6.0);
    let c = a + b;
    assert!(vec3_approx_eq(c, Vec3::new(-3.0, 7.0, -3.0), 1e-6));

    let d = c - a;
    assert!(vec3_approx_eq(d, b, 1e-6));
}

#[test]
fn vec3_max_element_picks_largest_axis() {
    assert_eq!(Vec3::new(1.0, 40.0, 2.0).max_element(), 40.0);
    assert_eq!(Vec3::new(7.0, 0.5, 3.0).max_element(), 7.0);
    assert_eq!(Vec3::new(0.0, 0.0, 9.0).max_element(), 9.0);
}

#[test]
fn vec3_contracted_scales_and_clamps() {
    let v = Vec3::new(40.0, 20.0, 0.0).contracted(0.2);
    assert!(vec3_approx_eq(v, Vec3::new(32.0, 16.0, 0.0), 1e-5));

    let neg = Vec3::new(-1.0, 2.0, -3.0).contracted(0.5);
    assert!(vec3_approx_eq(neg, Vec3::new(0.0, 1.0, 0.0), 1e-6));
}

#[test]
fn vec3_to_array() {
    let v = Vec3::new(1.5, 2.5, 3.5);
    assert_eq!(v.to_array(), [1.5, 2.5, 3.5]);
}

#[test]
fn aabb_voxel_is_unit_cube() {
    let b = Aabb::voxel(3, 4, 5);
    assert_eq!(b.min, Vec3::new(3.0, 4.0, 5.0));
    assert_eq!(b.max, Vec3::new(4.0, 5.0, 6.0));
    assert!(vec3_approx_eq(b.extents(), Vec3::ONE, 1e-6));
    assert!(b.is_ordered());
}

#[test]
fn aabb_ordering_detects_inverted_axis() {
    let b = Aabb::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 0.5, 1.0));
    assert!(!b.is_ordered());
}
