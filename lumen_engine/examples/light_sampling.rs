use rand::SeedableRng;
use tracing::{info, warn};

pub fn main() {
    // Type aliases used everywhere in the engine
    use lumen_engine::core::targets::MAIN;
    use lumen_engine::core::types::*;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // region CREATING THE SCENE

    use lumen_engine::mesh::{
        axis_box::AxisBoxBuilder, infinite_plane::InfinitePlaneMesh, list::MeshList, parallelogram::ParallelogramBuilder,
        planar::Planar, sphere::SphereMesh, Mesh,
    };
    use lumen_engine::shared::token::MaterialToken;

    let mut scene = MeshList::new();
    // Ground plane, which can't be bounded or sampled
    scene.add(InfinitePlaneMesh::from(Planar::new((0., 0., 0.), Vector3::Z, Vector3::X)));
    scene.add(AxisBoxBuilder::new_corners((-1., 0., -4.), (1., 2., -2.)));

    // NOTE: `add()` hands back the shared mesh, so the lights can go in a second list too
    let ceiling_light = scene.add(ParallelogramBuilder {
        p: Point3::new(-0.5, 4., -3.5),
        u: Vector3::new(1., 0., 0.),
        v: Vector3::new(0., 0., 1.),
        material: Some(MaterialToken(1)),
    });
    let bulb = scene.add(SphereMesh::new((2., 1., -1.), 0.25).with_material(MaterialToken(2)));
    let lights = MeshList::new_shared([ceiling_light, bulb]);

    info!(target: MAIN, scene = scene.len(), lights = lights.len(), "built scene");
    match scene.aabb(0., 1.) {
        Some(aabb) => info!(target: MAIN, ?aabb, "scene bounds"),
        None => info!(target: MAIN, "scene is unbounded"),
    }

    // endregion CREATING THE SCENE

    // region SAMPLING THE LIGHTS

    use lumen_engine::pdf::{cosine::CosinePdf, mesh::MeshPdf, mixture::MixturePdf, Pdf};
    use lumen_engine::shared::{interval::Interval, ray::Ray};
    use std::sync::Arc;

    // A point on the ground, looking up
    let origin = Point3::new(0.5, 0., 0.);
    let normal = Vector3::Y;

    let surface = CosinePdf::new(normal).expect("normal is non-zero");
    let pdf = MixturePdf::new(surface, MeshPdf::new(Arc::new(lights.into()), origin));

    let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
    let mut light_hits = 0;
    const SAMPLES: usize = 10_000;

    for _ in 0..SAMPLES {
        let dir = match pdf.generate(&mut rng) {
            Ok(dir) => dir,
            Err(err) => {
                warn!(target: MAIN, ?err, "couldn't sample direction");
                continue;
            }
        };

        let Some(hit) = scene.intersect(&Ray::new(origin, dir), &Interval::from(1e-3..)) else {
            continue;
        };
        if hit.material.is_some() {
            light_hits += 1;
        }
    }

    info!(
        target: MAIN,
        light_hits,
        samples = SAMPLES,
        "{:.1}% of sampled directions reached a light",
        100. * light_hits as Number / SAMPLES as Number
    );

    // endregion SAMPLING THE LIGHTS
}
