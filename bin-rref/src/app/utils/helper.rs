use std::path::Path;
use std::str::FromStr;
use nalgebra::Scalar;
use serde_json::Value;
use gauss_matrix::dense::Mat;
use crate::app::err::*;

pub fn measure<F, Res>(proc: F) -> (Res, std::time::Duration) 
where F: FnOnce() -> Res { 
    let start = std::time::Instant::now();
    let res = proc();
    let time = start.elapsed();
    (res, time)
}

pub fn guard_panic<F, R>(f: F) -> Result<R, Box<dyn std::error::Error>>
where F: FnOnce() -> Result<R, Box<dyn std::error::Error>> + std::panic::UnwindSafe {
    std::panic::catch_unwind(|| {
        f()
    }).unwrap_or_else(|e| {
        let info = match e.downcast::<String>() {
            Ok(v) => *v,
            Err(e) => match e.downcast::<&str>() {
                Ok(v) => v.to_string(),
                _ => "Unknown Source of Error".to_owned()
            }
        };
        Err(Error::Panic(info).into())
    })
}

/// Reads a matrix given either as a JSON array literal or as a path to 
/// a file holding one. Entries may be JSON numbers or strings.
pub fn load_mat<R>(input: &str) -> Result<Mat<R>, Box<dyn std::error::Error>>
where R: Scalar + FromStr { 
    type Rows = Vec<Vec<Value>>;

    let rows = { 
        if let Ok(rows) = serde_json::from_str::<Rows>(input) { 
            rows
        } else if Path::new(input).is_file() { 
            let text = std::fs::read_to_string(input)?;
            serde_json::from_str::<Rows>(&text)?
        } else { 
            return err!("invalid input matrix: '{}'", input);
        }
    };

    let mut entries = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() { 
        let mut r = Vec::with_capacity(row.len());
        for (j, v) in row.into_iter().enumerate() { 
            let Some(a) = parse_entry::<R>(&v) else { 
                return err!("invalid entry at ({i}, {j}): {v}");
            };
            r.push(a);
        }
        entries.push(r);
    }

    Ok(Mat::from_rows(entries)?)
}

fn parse_entry<R>(v: &Value) -> Option<R>
where R: FromStr { 
    match v { 
        Value::Number(n) => n.to_string().parse().ok(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None
    }
}
