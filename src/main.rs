use anyhow::Result;
use clap::Parser;
use log::info;

use slotset::{Args, SlotSet};

fn run(args: Args) -> Result<()> {
    let mut set = match &args.values {
        Some(values) => values.parse::<SlotSet>()?,
        None => SlotSet::new(),
    };

    for &value in &args.insert {
        let bucket = set.try_insert(value)?.index();
        info!("inserted {} into bucket {}", value, bucket);
    }

    for &value in &args.erase {
        if set.contains(value) {
            set.erase(value);
            info!("erased {} from bucket {}", value, set.bucket(value));
        } else {
            info!("{} is not in the set", value);
        }
    }

    if args.clear {
        set.clear();
    }

    for &value in &args.find {
        let cursor = set.find(value);
        if cursor.is_end() {
            println!("{}: not found (bucket {})", value, set.bucket(value));
        } else {
            println!("{}: found in bucket {}", *cursor, cursor.index());
        }
    }

    println!("{}", set);
    println!("size: {} of {} buckets", set.len(), set.bucket_count());
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(_) => {}
        Err(e) => panic!("{}", e),
    }
}
