use std::marker::PhantomData;
use std::str::FromStr;
use nalgebra::Scalar;
use gauss::Field;
use gauss_matrix::dense::find_violation;
use crate::app::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    match args.c_type { 
        CType::R => App::<f64>::new(args.clone()).run(),
        CType::Q => App::<Q>::new(args.clone()).run(),
    }
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    /// JSON array of rows, or a file containing one.
    pub matrix: String,

    #[arg(short = 't', long, default_value = "R")]
    pub c_type: CType,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

pub struct App<R> { 
    args: Args,
    _ring: PhantomData<R>
}

impl<R> App<R>
where R: Field + Scalar + FromStr {
    pub fn new(args: Args) -> Self { 
        App { args, _ring: PhantomData }
    }

    pub fn run(&self) -> Result<String, Box<dyn std::error::Error>> { 
        let mat = load_mat::<R>(&self.args.matrix)?;
        let res = match find_violation(&mat)? { 
            None    => "true".to_string(),
            Some(v) => format!("false\n{v}")
        };
        Ok(res)
    }
}
