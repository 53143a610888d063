//! Truth-table demo for the matrix container.

use log::info;
use rmatrix::activation::sigmoidf;
use rmatrix::{Matrix, MatrixError};

fn main() -> Result<(), MatrixError> {
    env_logger::init();

    info!("running on {} threads", rmatrix::threaded::available_threads());

    let table: Matrix<f32> = Matrix::from(vec![
        0.1, 0.0, 0.0, //
        0.0, 1.0, 1.0, //
        1.0, 0.0, 1.0, //
        1.0, 1.0, 0.0,
    ]);
    let table = table.resize(4)?;
    table.print(10, 10);

    let gram = table.matmul(&table.transpose())?;
    println!();
    gram.print(10, 10);

    println!();
    gram.map(sigmoidf).print(10, 10);

    Ok(())
}
