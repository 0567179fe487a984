use std::io::{self, BufWriter, Write};
use std::process;

use log::{debug, error};

use cyk::MembershipCache;
use cyk_load::{write_report, InstanceReader, LoadOptions};

fn main() {
    env_logger::init();

    let options = LoadOptions::from_env();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut cache = MembershipCache::new();
    let mut status = 0;

    for (i, instance) in InstanceReader::new(stdin.lock(), options).enumerate() {
        let instance = match instance {
            Ok(instance) => instance,
            Err(err) => {
                error!("{}", err);
                status = 1;
                break;
            }
        };
        let verdicts = cache.evaluate_all(&instance.grammar, instance.symbol_words());
        if let Err(err) = write_report(&mut out, i + 1, &instance.words, &verdicts) {
            error!("writing the report failed: {}", err);
            status = 1;
            break;
        }
    }

    if let Err(err) = out.flush() {
        error!("writing the report failed: {}", err);
        status = 1;
    }
    debug!("{:?}", cache.stats());
    process::exit(status);
}
