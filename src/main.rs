use linsys::{
    error::LinearSystemError,
    linear_system::LinearSystem,
    settings::SolverSettings,
    tensors::{hyperplane::Hyperplane, vector::Vector},
};
use tracing::info;

fn vector_test() -> Result<(), LinearSystemError> {
    let a = Vector::parse(&["8.462", "7.893", "-8.187"])?;
    let b = Vector::parse(&["6.984", "-5.975", "4.778"])?;
    println!("Cross: {}", a.cross(&b)?);

    let a = Vector::parse(&["-8.987", "-9.838", "5.031"])?;
    let b = Vector::parse(&["-4.268", "-1.861", "-8.866"])?;
    println!("Parallelogram: {}", a.area_of_parallelogram_with(&b)?);

    let a = Vector::parse(&["1.5", "9.547", "3.691"])?;
    let b = Vector::parse(&["-6.007", "0.124", "5.772"])?;
    println!("Triangle: {}", a.area_of_triangle_with(&b)?);

    let a = Vector::parse(&["3.039", "1.879"])?;
    let b = Vector::parse(&["0.825", "2.036"])?;
    println!("Projection: {}", a.parallel_component_to(&b)?);

    let a = Vector::parse(&["7.35", "0.221", "5.188"])?;
    let b = Vector::parse(&["2.751", "8.259", "3.985"])?;
    println!("Angle: {:.3} degrees", a.angle_with_degrees(&b)?);
    Ok(())
}

fn plane_test() -> Result<(), LinearSystemError> {
    let pairs = [
        (
            (["-0.412", "3.806", "0.728"], "-3.46"),
            (["1.03", "-9.515", "-1.82"], "8.65"),
        ),
        (
            (["2.611", "5.528", "0.283"], "4.6"),
            (["7.715", "8.306", "5.342"], "3.76"),
        ),
        (
            (["-7.926", "8.625", "-7.212"], "-7.952"),
            (["-2.642", "2.875", "-2.404"], "-2.443"),
        ),
    ];

    for (i, ((n1, c1), (n2, c2))) in pairs.iter().enumerate() {
        let a = Hyperplane::parse(n1, c1)?;
        let b = Hyperplane::parse(n2, c2)?;
        println!("Pair {}: {} and {}: {:?}", i + 1, a, b, a.relation_to(&b)?);
    }
    Ok(())
}

fn solve_test() -> Result<(), LinearSystemError> {
    let systems: [&[([&str; 3], &str)]; 4] = [
        &[
            (["5.862", "1.178", "-10.366"], "-8.15"),
            (["-2.931", "-0.589", "5.183"], "-4.075"),
        ],
        &[
            (["8.631", "5.112", "-1.816"], "-5.113"),
            (["4.315", "11.132", "-5.27"], "-6.775"),
            (["-2.158", "3.01", "-1.727"], "-0.831"),
        ],
        &[
            (["5.262", "2.739", "-9.878"], "-3.441"),
            (["5.111", "6.358", "7.638"], "-2.152"),
            (["2.016", "-9.924", "-1.367"], "-9.278"),
            (["2.167", "-13.543", "-18.883"], "-10.567"),
        ],
        &[
            (["0.935", "1.76", "-9.365"], "-9.955"),
            (["0.187", "0.352", "-1.873"], "-1.991"),
            (["0.374", "0.704", "-3.746"], "-3.982"),
            (["-0.561", "-1.056", "5.619"], "5.973"),
        ],
    ];

    for planes in systems {
        let s = LinearSystem::new(
            planes
                .iter()
                .map(|(n, c)| Hyperplane::parse(n, c))
                .collect::<Result<_, _>>()?,
            SolverSettings::default(),
        )?;

        info!("Solving a system of {} equations", s.len());
        println!("{}", s);
        println!("RREF:\n{}", s.compute_rref());
        println!("{}\n", s.solve());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("linsys {}", env!("LINSYS_VERSION"));

    vector_test()?;
    plane_test()?;
    solve_test()?;
    Ok(())
}
