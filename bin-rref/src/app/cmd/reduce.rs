use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;
use itertools::Itertools;
use nalgebra::Scalar;
use gauss::Field;
use gauss::num::{Exact, Normalizer, Tolerance};
use gauss::util::format::labelled;
use gauss_matrix::MatTrait;
use gauss_matrix::dense::{Mat, RrefCalc, RrefStep};
use crate::app::utils::*;
use crate::app::err::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    match args.c_type { 
        CType::R => { 
            ensure!(args.eps >= 0.0, "`eps` must be non-negative: {}", args.eps);
            ensure!(args.digits <= 15, "`digits` must be at most 15: {}", args.digits);

            let n = Tolerance::new(args.eps, args.digits);
            App::<f64, _>::new(args.clone(), n).run()
        },
        CType::Q => { 
            App::<Q, _>::new(args.clone(), Exact).run()
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
pub struct Args { 
    /// JSON array of rows, or a file containing one.
    pub matrix: String,

    #[arg(short = 't', long, default_value = "R")]
    pub c_type: CType,

    /// Values this close to an integer snap to it.
    #[arg(short, long, default_value_t = Tolerance::DEFAULT_EPS)]
    pub eps: f64,

    /// Decimal places kept after rounding.
    #[arg(short, long, default_value_t = Tolerance::DEFAULT_DIGITS)]
    pub digits: u32,

    /// Print the matrix after each column.
    #[arg(short = 's', long)]
    pub trace: bool,

    #[arg(short = 'p', long)]
    pub show_pivots: bool,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

impl Default for Args {
    fn default() -> Self {
        Self { 
            matrix: String::new(), 
            c_type: CType::default(), 
            eps: Tolerance::DEFAULT_EPS, 
            digits: Tolerance::DEFAULT_DIGITS, 
            trace: false, 
            show_pivots: false, 
            log: 0 
        }
    }
}

pub struct App<R, N> { 
    args: Args,
    normalizer: N,
    buff: String,
    _ring: PhantomData<R>
}

impl<R, N> App<R, N>
where R: Field + Scalar + FromStr, N: Normalizer<R> {
    pub fn new(args: Args, normalizer: N) -> Self { 
        let buff = String::with_capacity(1024);
        App { args, normalizer, buff, _ring: PhantomData }
    }

    pub fn run(&mut self) -> Result<String, Box<dyn std::error::Error>> { 
        let mut mat = load_mat::<R>(&self.args.matrix)?;
        let trace = self.args.trace;

        if trace { 
            self.out_mat(&mat, "Starting matrix");
        }

        let mut snapshots = vec![];
        let mut calc = RrefCalc::new(&mut mat, &self.normalizer)?;

        calc.process_with(|step, m| 
            if trace { 
                snapshots.push(labelled(m, step_label(step)));
            }
        );

        let pivots = calc.pivots().to_vec();

        for s in snapshots { 
            self.out(&s);
            self.out("");
        }

        self.out_mat(&mat, "RREF");

        if self.args.show_pivots { 
            self.show_pivots(&mat, &pivots);
        }

        Ok(self.flush())
    }

    fn show_pivots(&mut self, mat: &Mat<R>, pivots: &[usize]) { 
        let rank = pivots.len();
        self.out(&format!("rank: {rank}"));
        self.out(&format!("pivots: [{}]", pivots.iter().join(", ")));

        if mat.is_square() { 
            let inv = if rank == mat.nrows() { "invertible" } else { "singular" };
            self.out(inv);
        }
    }

    fn out_mat<D>(&mut self, mat: &Mat<D>, label: &str)
    where D: Display { 
        self.out(&labelled(mat, label));
        self.out("");
    }

    fn out(&mut self, str: &str) { 
        self.buff.push_str(str);
        self.buff.push('\n');
    }

    fn flush(&mut self) -> String { 
        let res = std::mem::take(&mut self.buff);
        res.trim_end().to_string()
    }
}

fn step_label(step: &RrefStep) -> String { 
    match step.pivot { 
        Some((from, to)) if from != to => format!("~  col {}: pivot R{from} -> R{to}", step.col),
        Some((from, _))                => format!("~  col {}: pivot R{from}", step.col),
        None                           => format!("~  col {}: no pivot", step.col),
    }
}

#[cfg(test)]
mod tests { 
    use super::*;

    fn lines(rows: &[&str]) -> String { 
        rows.join("\n")
    }

    #[test]
    fn reduce_example() { 
        let args = Args { 
            matrix: "[[2,4,4,2],[3,6,6,3],[0,0,2,0]]".to_string(), 
            ..Default::default()
        };
        let res = dispatch(&args).unwrap();
        assert_eq!(res, lines(&[
            "       1       2       0       1",
            "       0       0       1       0",
            "       0       0       0       0      RREF",
        ]));
    }

    #[test]
    fn reduce_pivots() { 
        let args = Args { 
            matrix: "[[2,3,4],[1,2,1],[5,2,0]]".to_string(), 
            show_pivots: true,
            ..Default::default()
        };
        let res = dispatch(&args).unwrap();
        assert!(res.ends_with("rank: 3\npivots: [0, 1, 2]\ninvertible"));
    }

    #[test]
    fn reduce_singular() { 
        let args = Args { 
            matrix: "[[1,2],[2,4]]".to_string(), 
            show_pivots: true,
            ..Default::default()
        };
        let res = dispatch(&args).unwrap();
        assert!(res.ends_with("rank: 1\npivots: [0]\nsingular"));
    }

    #[test]
    fn reduce_trace() { 
        let args = Args { 
            matrix: "[[0,0],[2,0]]".to_string(), 
            trace: true,
            ..Default::default()
        };
        let res = dispatch(&args).unwrap();
        assert_eq!(res, lines(&[
            "       0       0",
            "       2       0      Starting matrix",
            "",
            "       1       0",
            "       0       0      ~  col 0: pivot R1 -> R0",
            "",
            "       1       0",
            "       0       0      ~  col 1: no pivot",
            "",
            "       1       0",
            "       0       0      RREF",
        ]));
    }

    #[test]
    fn reduce_exact() { 
        let args = Args { 
            matrix: "[[1,4,3,2],[2,3,1,1]]".to_string(), 
            c_type: CType::Q,
            ..Default::default()
        };
        let res = dispatch(&args).unwrap();
        assert_eq!(res, lines(&[
            "       1       0      -1    -2/5",
            "       0       1       1     3/5      RREF",
        ]));
    }

    #[test]
    fn reduce_float() { 
        let args = Args { 
            matrix: "[[1,4,3,2],[2,3,1,1]]".to_string(), 
            ..Default::default()
        };
        let res = dispatch(&args).unwrap();
        assert_eq!(res, lines(&[
            "       1       0      -1    -0.4",
            "       0       1       1     0.6      RREF",
        ]));
    }

    #[test]
    fn reduce_errors() { 
        let args = Args { matrix: "[[1,2],[3]]".to_string(), ..Default::default() };
        assert!(dispatch(&args).is_err());

        let args = Args { matrix: "[[1]]".to_string(), eps: -1.0, ..Default::default() };
        assert!(dispatch(&args).is_err());

        let args = Args { matrix: "[[1]]".to_string(), digits: 99, ..Default::default() };
        assert!(dispatch(&args).is_err());
    }
}
