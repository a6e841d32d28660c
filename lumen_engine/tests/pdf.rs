use approx::assert_relative_eq;
use lumen_engine::core::types::*;
use lumen_engine::mesh::list::MeshList;
use lumen_engine::mesh::sphere::SphereMesh;
use lumen_engine::mesh::{Mesh, MeshInstance, SampleError, SAMPLE_EPSILON};
use lumen_engine::pdf::cosine::CosinePdf;
use lumen_engine::pdf::mesh::MeshPdf;
use lumen_engine::pdf::mixture::MixturePdf;
use lumen_engine::pdf::{Pdf, PdfInstance};
use lumen_engine::shared::interval::Interval;
use lumen_engine::shared::ray::Ray;
use lumen_engine::shared::rng::cone_pdf;
use std::f64::consts::FRAC_1_PI;
use std::sync::Arc;

mod common;

#[test]
pub fn cosine_values() {
    let pdf = CosinePdf::new(Vector3::new(0., 0., 2.)).unwrap();

    assert_relative_eq!(pdf.value(Vector3::Z).unwrap(), FRAC_1_PI);
    assert_eq!(pdf.value(-Vector3::Z), Ok(0.));
    assert_relative_eq!(pdf.value(Vector3::X).unwrap(), 0., epsilon = 1e-12);
    assert!(CosinePdf::new(Vector3::ZERO).is_none());
}

/// Every generated direction is in the hemisphere, and `E[cos θ] = 2/3` for a cosine-weighted hemisphere
#[test]
pub fn cosine_generate() {
    const SAMPLES: usize = 20_000;
    let mut rng = common::rng();
    let normal = Vector3::new(1., 1., 0.).normalize();
    let pdf = CosinePdf::new(normal).unwrap();

    let mut cos_sum = 0.;
    for _ in 0..SAMPLES {
        let dir = pdf.generate(&mut rng).unwrap();
        assert_relative_eq!(dir.length(), 1., epsilon = 1e-9);
        let cos = Vector3::dot(dir, normal);
        assert!(cos >= -1e-9, "direction {dir:?} below the surface");
        cos_sum += cos;
    }
    let mean = cos_sum / SAMPLES as Number;
    println!("mean cos: {mean}");

    assert_relative_eq!(mean, 2. / 3., epsilon = 0.01);
}

#[test]
pub fn mesh_pdf_forwards_to_mesh() {
    let mut rng = common::rng();
    let origin = Point3::new(0., 1., 0.);
    let sphere: Arc<MeshInstance> = Arc::new(SphereMesh::new((0., 1., -4.), 1.).into());
    let pdf = MeshPdf::new(Arc::clone(&sphere), origin);

    for _ in 0..100 {
        let dir = pdf.generate(&mut rng).unwrap();
        assert!(sphere
            .intersect(&Ray::new(origin, dir), &Interval::from(SAMPLE_EPSILON..))
            .is_some());
        assert_eq!(pdf.value(dir), sphere.pdf_value(origin, dir));
    }
}

#[test]
pub fn mesh_pdf_of_empty_list_fails() {
    common::init_tracing();
    let mut rng = common::rng();
    let lights = Arc::new(MeshInstance::from(MeshList::new()));
    let pdf = MeshPdf::new(lights, Point3::ZERO);

    assert_eq!(pdf.value(Vector3::Z), Err(SampleError::EmptyList));
    assert_eq!(pdf.generate(&mut rng), Err(SampleError::EmptyList));
}

#[test]
pub fn mixture_value_is_average() {
    let light = Arc::new(MeshInstance::from(SphereMesh::new((0., 0., 5.), 1.)));
    let mixture = MixturePdf::new(
        CosinePdf::new(Vector3::Z).unwrap(),
        MeshPdf::new(light, Point3::ZERO),
    );

    let expected = 0.5 * FRAC_1_PI + 0.5 * cone_pdf((1. - 1. / 25. as Number).sqrt());
    assert_relative_eq!(mixture.value(Vector3::Z).unwrap(), expected, max_relative = 1e-9);
    // Below the surface and away from the light
    assert_eq!(mixture.value(-Vector3::Z), Ok(0.));
}

/// Half the samples come from the light, the other half from the cosine lobe (a few of which also hit the light)
#[test]
pub fn mixture_generate_splits_samples() {
    const SAMPLES: usize = 20_000;
    let mut rng = common::rng();
    let light = Arc::new(MeshInstance::from(SphereMesh::new((0., 0., 5.), 1.)));
    let mixture: PdfInstance = MixturePdf::new(
        CosinePdf::new(Vector3::Z).unwrap(),
        MeshPdf::new(Arc::clone(&light), Point3::ZERO),
    )
    .into();

    let hits = (0..SAMPLES)
        .map(|_| mixture.generate(&mut rng).unwrap())
        .filter(|dir| {
            light
                .intersect(&Ray::new(Point3::ZERO, *dir), &Interval::from(SAMPLE_EPSILON..))
                .is_some()
        })
        .count();
    let frac = hits as Number / SAMPLES as Number;
    println!("light fraction: {frac}");

    // Cosine-weighted probability of hitting the cone is `sin² θmax = r² / d²`
    assert_relative_eq!(frac, 0.5 + 0.5 * (1. / 25.), epsilon = 0.02);
}

/// Errors from either side of the mixture aren't swallowed
#[test]
pub fn mixture_propagates_errors() {
    let mut rng = common::rng();
    let empty = Arc::new(MeshInstance::from(MeshList::new()));
    let mixture = MixturePdf::new(CosinePdf::new(Vector3::Z).unwrap(), MeshPdf::new(empty, Point3::ZERO));

    assert_eq!(mixture.value(Vector3::Z), Err(SampleError::EmptyList));

    let results = (0..64).map(|_| mixture.generate(&mut rng)).collect::<Vec<_>>();
    assert!(results.iter().any(|r| r == &Err(SampleError::EmptyList)));
    assert!(results.iter().any(|r| r.is_ok()));
}
