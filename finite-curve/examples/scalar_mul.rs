use finite_curve::parse::{parse_integer, CurveConfig};
use finite_curve::Curve;
use structopt::StructOpt;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(StructOpt)]
struct Opt {
    #[structopt(long, help = "json file with the curve parameters")]
    curve: PathBuf,
    #[structopt(long, help = "decimal or 0x prefixed scalar")]
    scalar: String,
    #[structopt(long, help = "reduce the scalar modulo the subgroup order")]
    reduce: bool,
    #[structopt(long, help = "check that the generator has the configured order")]
    check_order: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let opt = Opt::from_args();

    let curve_file = File::open(opt.curve)?;
    let curve_reader = BufReader::new(curve_file);
    let config: CurveConfig = serde_json::from_reader(curve_reader)?;
    let curve = Curve::try_from(config)?;
    println!("{}", curve);

    if opt.check_order {
        curve.check_generator_order()?;
        println!("generator order verified");
    }

    let scalar = parse_integer(&opt.scalar)?;
    let point = if opt.reduce {
        curve.mul_generator(scalar.clone())?
    } else {
        curve.scalar_mul(curve.generator(), scalar.clone())?
    };
    println!("{} * G = {}", scalar, point);
    Ok(())
}
