mod app;
use app::App;
use app::err::Error;

fn main() {
    let app = App::new();
    let res = app.run();
    
    match res { 
        Ok(output) => println!("{output}"),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("\x1b[0;31merror\x1b[0m: {e}");

            let code = match e.downcast_ref::<Error>() { 
                Some(Error::Panic(_)) => 101,
                _ => 1
            };
            std::process::exit(code)
        }
    }
}
