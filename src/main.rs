use std::io::{Cursor, Read, Write};

use clap::{arg, crate_version, ArgAction, Command};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let long_help = "Examples:
---------
Compress:      `nextcomp -c -i my_expanded -o my_compressed`
Expand:        `nextcomp -e -i my_compressed -o my_expanded`";

    let main_cmd = Command::new("nextcomp")
        .about("Compress and expand with a first-order Markov/Huffman container")
        .after_long_help(long_help)
        .version(crate_version!())
        .arg(arg!(-c --compress "compress the input").action(ArgAction::SetTrue).conflicts_with("expand"))
        .arg(arg!(-e --expand "expand the input").action(ArgAction::SetTrue))
        .arg(arg!(-i --input <PATH> "input path (defaults to stdin)").required(false))
        .arg(arg!(-o --output <PATH> "output path (defaults to stdout)").required(false));

    let matches = main_cmd.get_matches();

    let do_compress = matches.get_flag("compress");
    let do_expand = matches.get_flag("expand");
    if do_compress == do_expand {
        return Err("exactly one of -c (compress) or -e (expand) is required".into());
    }

    let mut reader: Box<dyn Read> = match matches.get_one::<String>("input") {
        Some(path) => Box::new(std::fs::File::open(path)?),
        None => Box::new(std::io::stdin()),
    };
    let mut writer: Box<dyn Write> = match matches.get_one::<String>("output") {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    if do_compress {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        let original_size = buf.len();
        let mut cursor = Cursor::new(buf);
        let mut encoded = Vec::new();
        nextcomp::compress(&mut cursor, &mut encoded)?;
        writer.write_all(&encoded)?;
        let ratio = (1.0 - encoded.len() as f64 / original_size as f64) * 100.0;
        log::info!("original {original_size} bytes");
        log::info!("encoded {} bytes", encoded.len());
        log::info!("ratio {ratio:.2} %");
    } else {
        nextcomp::decompress(&mut reader, &mut writer)?;
    }

    Ok(())
}
