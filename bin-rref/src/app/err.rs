use derive_more::Display;

#[derive(Debug, Display)]
pub enum Error { 
    #[display("{_0}")]
    Input(String),

    #[display("panic: {_0}")]
    Panic(String),
}

impl std::error::Error for Error {}

macro_rules! err {
    ($($arg:tt)*) => {{
        use crate::app::err::*;
        let e = Error::Input(format!($($arg)*));
        Err( e.into() )
    }}
}

macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {{
        if !$cond { 
            return err!($($arg)*);
        }
    }}
}

pub(crate) use {err, ensure};
