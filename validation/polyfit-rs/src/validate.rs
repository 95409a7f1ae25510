use polyfit_rs::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    input: InputData,
    params: Params,
    #[serde(default)]
    reference: Option<Value>,
    #[serde(skip_deserializing)]
    result: ResultData,
}

/// 1D cases carry `x` and `y`; 2D cases add `z` and the grid shape, with all
/// three grids stored row-major.
#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    x: Vec<f64>,
    y: Vec<f64>,
    #[serde(default)]
    z: Option<Vec<f64>>,
    #[serde(default)]
    shape: Option<(usize, usize)>,
}

#[derive(Debug, Deserialize, Serialize)]
struct Params {
    degree: usize,
    #[serde(default)]
    degree_y: Option<usize>,
    #[serde(default)]
    solver: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    coefficients: Vec<f64>,
    origin: Vec<f64>,
    solver: String,
    mean_abs_residual: f64,
    max_abs_residual: f64,
    rmse: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input_dir = Path::new("../output/reference");
    let output_dir = Path::new("../output/polyfit_rs");

    if !input_dir.exists() {
        eprintln!(
            "Input directory {:?} does not exist. Run validate.py first.",
            input_dir
        );
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            println!("Processing {:?}", path.file_name().unwrap_or_default());
            process_file(&path, output_dir)?;
        }
    }

    Ok(())
}

fn parse_solver(name: Option<&str>) -> Result<SolverMethod, Box<dyn Error>> {
    Ok(match name {
        None | Some("adaptive") => Adaptive,
        Some("cholesky") => Cholesky,
        Some("qr") => QR,
        Some("svd") => SVD,
        Some(other) => return Err(format!("Unsupported solver: {}", other).into()),
    })
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<(), Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    let solver = parse_solver(data.params.solver.as_deref())?;
    let degree_y = data.params.degree_y.unwrap_or(data.params.degree);

    let model = Polyfit::new()
        .degree(data.params.degree)
        .degrees(data.params.degree, degree_y)
        .solver(solver)
        .return_diagnostics()
        .build()?;

    let (coefficients, origin, method, diagnostics) = match (&data.input.z, data.input.shape) {
        (Some(z), Some((rows, cols))) => {
            let x = Matrix2D::from_row_major(rows, cols, data.input.x.clone())?;
            let y = Matrix2D::from_row_major(rows, cols, data.input.y.clone())?;
            let z = Matrix2D::from_row_major(rows, cols, z.clone())?;

            let result = model.fit_2d(&x, &y, &z)?;
            let origin = result.polynomial.origin();
            (
                result.polynomial.coefficients().as_slice().to_vec(),
                vec![origin.0, origin.1],
                result.solver,
                result.diagnostics,
            )
        }
        (Some(_), None) => return Err("2D input requires a grid shape".into()),
        (None, _) => {
            let result = model.fit(&data.input.x, &data.input.y)?;
            (
                result.polynomial.coefficients().to_vec(),
                vec![result.polynomial.origin()],
                result.solver,
                result.diagnostics,
            )
        }
    };

    let diagnostics = diagnostics.ok_or("diagnostics were not returned")?;
    data.result = ResultData {
        coefficients,
        origin,
        solver: method.map_or("mean", |m| m.name()).to_string(),
        mean_abs_residual: diagnostics.mean_abs_residual,
        max_abs_residual: diagnostics.max_abs_residual,
        rmse: diagnostics.rmse,
    };

    let file_name = input_path.file_name().ok_or("input path has no file name")?;
    let output_path = output_dir.join(file_name);
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_path, output_json)?;

    Ok(())
}
