//! Conditional probability paths, end to end: pick a schedule, build a grid,
//! generate noise, integrate both the ODE and SDE paths, and print how each
//! one closes in on the data point.

use flow_paths::gaussian::{normalize_components, sample_mixture, GaussianComponent};
use flow_paths::grid::uniform_time_grid;
use flow_paths::point::Point2D;
use flow_paths::rng::{generate_brownian_noise_for_times, seed_rng_from_u64};
use flow_paths::schedules::{DiffusionSchedule, NoiseSchedule};
use flow_paths::solvers::{conditional_ode_trajectory, conditional_sde_trajectory};
use flow_paths::PathResult;

fn main() -> PathResult<()> {
    let mut rng = seed_rng_from_u64(7);

    // Data distribution: a two-lobe Gaussian mixture on the x-axis
    let components = normalize_components(&[
        GaussianComponent::new(1.0, -1.5, 0.3),
        GaussianComponent::new(2.0, 1.0, 0.4),
    ])?;
    let data = Point2D::new(sample_mixture(&mut rng, &components)?, 0.0);
    let initial = Point2D::new(-2.2, 1.8);

    println!("data point:     ({:.4}, {:.4})", data.x, data.y);
    println!("initial sample: ({:.4}, {:.4})\n", initial.x, initial.y);

    let times = uniform_time_grid(200)?;
    let diffusion = DiffusionSchedule::constant(0.5)?;

    for schedule in [
        NoiseSchedule::Linear,
        NoiseSchedule::ConstantVariance,
        NoiseSchedule::Circular,
    ] {
        let noise = generate_brownian_noise_for_times(&mut rng, &times);

        let ode = conditional_ode_trajectory(initial, data, &schedule, &times);
        let sde =
            conditional_sde_trajectory(initial, data, &schedule, &times, &diffusion, &noise)?;

        println!("schedule '{}':", schedule.name());
        for &i in &[0, 50, 100, 150, 200] {
            println!(
                "  t = {:.2}  ode dist {:.5}  sde dist {:.5}",
                times[i],
                ode[i].distance(&data),
                sde[i].distance(&data)
            );
        }
        println!();
    }

    Ok(())
}
