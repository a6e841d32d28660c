use approx::assert_relative_eq;
use lumen_engine::core::types::*;
use lumen_engine::mesh::infinite_plane::InfinitePlaneMesh;
use lumen_engine::mesh::list::MeshList;
use lumen_engine::mesh::moving_sphere::MovingSphereBuilder;
use lumen_engine::mesh::parallelogram::ParallelogramBuilder;
use lumen_engine::mesh::planar::Planar;
use lumen_engine::mesh::sphere::SphereMesh;
use lumen_engine::mesh::{Mesh, MeshInstance, SampleError, SAMPLE_EPSILON};
use lumen_engine::shared::interval::Interval;
use lumen_engine::shared::ray::Ray;
use lumen_engine::shared::rng;
use lumen_engine::shared::token::MaterialToken;
use rand::Rng;
use std::f64::consts::PI;

mod common;

#[test]
pub fn empty_list_can_not_be_sampled() {
    common::init_tracing();
    let mut rng = common::rng();
    let list = MeshList::default();

    assert_eq!(
        list.pdf_value(Point3::ZERO, Vector3::new(0., 0., -1.)),
        Err(SampleError::EmptyList)
    );
    assert_eq!(list.random_direction(Point3::ZERO, &mut rng), Err(SampleError::EmptyList));
}

/// The density of the list is the plain average of the members' densities, in every direction
#[test]
pub fn pdf_is_mean_of_members() {
    let mut rng = common::rng();
    let members: [MeshInstance; 3] = [
        SphereMesh::new((0., 0., -3.), 1.).into(),
        SphereMesh::new((0.5, 0., -5.), 2.).into(),
        ParallelogramBuilder {
            p: Point3::new(-1., -1., -2.),
            u: Vector3::new(2., 0., 0.),
            v: Vector3::new(0., 2., 0.),
            material: None,
        }
        .into(),
    ];
    let list = MeshList::from_iter(members.clone());

    for _ in 0..500 {
        let dir = if rng.gen_bool(0.5) {
            rng::vector_on_unit_sphere(&mut rng)
        } else {
            list.random_direction(Point3::ZERO, &mut rng).unwrap()
        };

        let expected = members
            .iter()
            .map(|m| m.pdf_value(Point3::ZERO, dir).unwrap())
            .sum::<Number>()
            / 3.;
        let actual = list.pdf_value(Point3::ZERO, dir).unwrap();
        assert_relative_eq!(expected, actual, epsilon = 1e-12, max_relative = 1e-12);
    }
}

/// Members without a sampling scheme count towards the average with a density of zero
#[test]
pub fn unsampled_members_dilute_pdf() {
    let sphere = SphereMesh::new((0., 0., -3.), 1.);
    let plane = InfinitePlaneMesh::from(Planar::new((0., -1., 0.), Vector3::X, Vector3::Z));
    let dir = Vector3::new(0., 0., -1.);

    let alone = MeshList::new_with(sphere).pdf_value(Point3::ZERO, dir).unwrap();
    let mut list = MeshList::new_with(sphere);
    list.add(plane);

    assert_relative_eq!(list.pdf_value(Point3::ZERO, dir).unwrap(), alone / 2.);
}

/// Sampling errors of a member come out of the list unchanged
#[test]
pub fn member_errors_propagate() {
    let mut rng = common::rng();
    let list = MeshList::new_with(MovingSphereBuilder {
        pos_0: Point3::new(0., 0., -2.),
        pos_1: Point3::new(0., 1., -2.),
        time_0: 0.,
        time_1: 1.,
        radius: 0.5,
        material: None,
    });

    assert_eq!(
        list.random_direction(Point3::ZERO, &mut rng),
        Err(SampleError::Unsupported)
    );
    // A nested empty list is picked every time, so its error surfaces too
    let nested = MeshList::new_with(MeshList::new());
    assert_eq!(
        nested.random_direction(Point3::ZERO, &mut rng),
        Err(SampleError::EmptyList)
    );
    assert_eq!(
        nested.pdf_value(Point3::ZERO, Vector3::X),
        Err(SampleError::EmptyList)
    );
}

/// Samples from two spheres in different directions, and checks that the sampled directions follow the density:
/// - every direction hits one of the members
/// - each member is picked about half the time
/// - `E[1/pdf]` is the total solid angle covered by the members
#[test]
pub fn sampling_matches_pdf() {
    const SAMPLES: usize = 20_000;
    let mut rng = common::rng();

    let list = MeshList::from_iter([
        common::tagged_sphere((0., 0., -3.), 1., 1),
        common::tagged_sphere((2., 0., 0.), 1., 2),
    ]);
    let origin = Point3::ZERO;
    let interval = Interval::from(SAMPLE_EPSILON..);

    let (mut hits, mut hits_a) = (0usize, 0usize);
    let mut inv_pdf_sum = 0.;

    for _ in 0..SAMPLES {
        let dir = list.random_direction(origin, &mut rng).unwrap();
        assert_relative_eq!(dir.length(), 1., epsilon = 1e-9);

        let Some(hit) = list.intersect(&Ray::new(origin, dir), &interval) else {
            continue;
        };
        hits += 1;
        if hit.material == Some(MaterialToken(1)) {
            hits_a += 1;
        }

        let pdf = list.pdf_value(origin, dir).unwrap();
        assert!(pdf > 0., "sampled direction {dir:?} had zero density");
        inv_pdf_sum += 1. / pdf;
    }

    let hit_frac = hits as Number / SAMPLES as Number;
    let a_frac = hits_a as Number / hits as Number;
    let solid_angle = inv_pdf_sum / hits as Number;
    let expected_solid_angle = common::sphere_solid_angle(1., 3.) + common::sphere_solid_angle(1., 2.);
    println!("hit_frac: {hit_frac}, a_frac: {a_frac}, solid_angle: {solid_angle} (expected {expected_solid_angle})");

    assert!(hit_frac > 0.999, "too many samples missed: {hit_frac}");
    assert_relative_eq!(a_frac, 0.5, epsilon = 0.02);
    assert_relative_eq!(solid_angle, expected_solid_angle, max_relative = 0.05);
}

/// A quad sitting in front of a sphere, entirely inside the cone of directions that reach the sphere.
///
/// Directions through the quad can be sampled by either member, so their density is the sum of both halves. With
/// that, `E[1/pdf]` is still the solid angle of the sphere alone, and the quad (being in front) takes every hit in
/// its cone
#[test]
pub fn sampling_matches_pdf_with_overlapping_members() {
    const SAMPLES: usize = 20_000;
    let mut rng = common::rng();

    let quad = ParallelogramBuilder {
        p: Point3::new(-0.5, -0.5, -2.),
        u: Vector3::new(1., 0., 0.),
        v: Vector3::new(0., 1., 0.),
        material: Some(MaterialToken(1)),
    };
    let members: [MeshInstance; 2] = [common::tagged_sphere((0., 0., -5.), 2., 2).into(), quad.into()];
    let list = MeshList::from_iter(members);
    let origin = Point3::ZERO;
    let interval = Interval::from(SAMPLE_EPSILON..);

    let (mut hits, mut quad_hits) = (0usize, 0usize);
    let mut inv_pdf_sum = 0.;

    for _ in 0..SAMPLES {
        let dir = list.random_direction(origin, &mut rng).unwrap();
        let pdf = list.pdf_value(origin, dir).unwrap();
        assert!(pdf > 0., "sampled direction {dir:?} had zero density");
        inv_pdf_sum += 1. / pdf;

        let Some(hit) = list.intersect(&Ray::new(origin, dir), &interval) else {
            continue;
        };
        hits += 1;
        if hit.material == Some(MaterialToken(1)) {
            quad_hits += 1;
        }
    }

    let sphere_solid_angle = common::sphere_solid_angle(2., 5.);
    // Centred unit square at distance 2
    let quad_solid_angle = 4. * (1. / 17. as Number).asin();

    let solid_angle = inv_pdf_sum / SAMPLES as Number;
    let quad_frac = quad_hits as Number / SAMPLES as Number;
    // Half the samples come from the quad, plus the share of the sphere's samples that pass through the quad
    let expected_quad_frac = 0.5 + 0.5 * quad_solid_angle / sphere_solid_angle;
    println!("solid_angle: {solid_angle} (expected {sphere_solid_angle}), quad_frac: {quad_frac} (expected {expected_quad_frac})");

    assert!(hits as Number / SAMPLES as Number > 0.999, "too many samples missed: {hits}");
    assert_relative_eq!(solid_angle, sphere_solid_angle, max_relative = 0.05);
    assert_relative_eq!(quad_frac, expected_quad_frac, epsilon = 0.02);
}

/// Evaluating the density over uniformly random directions should integrate to one
#[test]
pub fn pdf_integrates_to_one() {
    const SAMPLES: usize = 100_000;
    let mut rng = common::rng();

    let list = MeshList::from_iter([
        SphereMesh::new((0., 0., -3.), 1.),
        SphereMesh::new((2., 0., 0.), 1.),
    ]);

    let mean = (0..SAMPLES)
        .map(|_| {
            let dir = rng::vector_on_unit_sphere(&mut rng);
            list.pdf_value(Point3::ZERO, dir).unwrap()
        })
        .sum::<Number>()
        / SAMPLES as Number;
    let integral = mean * 4. * PI;
    println!("integral: {integral}");

    assert_relative_eq!(integral, 1., max_relative = 0.05);
}
