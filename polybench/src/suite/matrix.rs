use super::timed;
use rand::Rng;

const SIZE: usize = 100;

pub type Matrix = Vec<Vec<f64>>;

/// Naive `a * b`. `a` must be `n x m` and `b` `m x p`, both non-empty.
pub fn matrix_multiply(a: &Matrix, b: &Matrix) -> Matrix {
    let rows = a.len();
    let inner = a[0].len();
    let cols = b[0].len();

    let mut result = vec![vec![0.; cols]; rows];
    for (i, row) in result.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            for k in 0..inner {
                *cell += a[i][k] * b[k][j];
            }
        }
    }
    result
}

fn random_matrix(rng: &mut impl Rng, size: usize) -> Matrix {
    (0..size)
        .map(|_| (0..size).map(|_| rng.gen::<f64>()).collect())
        .collect()
}

pub fn run_benchmark() {
    let mut rng = rand::thread_rng();
    let a = random_matrix(&mut rng, SIZE);
    let b = random_matrix(&mut rng, SIZE);

    let product = timed(|| matrix_multiply(&a, &b));

    println!("Test: Matrix Multiplication");
    println!("Matrix size: {SIZE}x{SIZE}");
    println!("Execution time: {} ms", product.elapsed.as_millis());
    println!("Result sample (0,0): {:.6}", product.value[0][0]);
}
