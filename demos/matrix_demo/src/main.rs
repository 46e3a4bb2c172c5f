use argh::FromArgs;
use mxl::{matrix, Initializer, Matrix};
use rand::{rngs::StdRng, SeedableRng};

#[derive(FromArgs)]
/// Walk through the matrix API: transpose, multiply, add, scale.
struct Args {
    /// initializer for the first matrix: zeros, ones, random or identity.
    /// Without it a fixed 3x3 matrix is used.
    #[argh(option, short = 'i')]
    initializer: Option<String>,

    /// number of rows and columns of the generated matrix
    #[argh(option, short = 's', default = "3")]
    size: usize,

    /// seed for the random initializer
    #[argh(option)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mat1: Matrix<i64> = match (&args.initializer, args.seed) {
        (None, _) => matrix![[1, 2, 3], [4, 5, 6], [7, 8, 9]],
        (Some(name), seed) => match (name.parse::<Initializer>()?, seed) {
            (Initializer::Random, Some(seed)) => {
                log::info!("drawing a {0}x{0} random matrix with seed {seed}", args.size);
                Matrix::random_with(args.size, args.size, &mut StdRng::seed_from_u64(seed))
            }
            (init, _) => Matrix::from_initializer(args.size, args.size, init),
        },
    };

    // transpose copy leaves mat1 untouched
    let mat2 = mat1.transpose_copy();

    println!("Matrix 1:");
    mat1.display();
    println!();
    println!("Matrix 2:");
    mat2.display();
    println!();

    // multiplication and addition
    let mut mat3 = mat1.try_mul(&mat2)?;
    mat3.try_add_assign(&mat1)?;
    println!("Matrix 3:");
    mat3.display();
    println!();

    // scalar multiplication
    mat3 *= 2;
    println!("Matrix 3 again:");
    mat3.display();
    println!();

    // in-place, constant-time transpose
    mat3.transpose();
    log::info!(
        "mat3 is now {:?} read in {:?} order",
        mat3.shape(),
        mat3.order()
    );
    println!("Matrix 3 again, transposed:");
    mat3.display();

    Ok(())
}
