use flagparse::{Flag, Parser};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("{}", err);
        std::process::exit(1)
    }
}

fn run() -> flagparse::Result<()> {
    let help = Flag::new("h", "help")?.store_true().with_description("print this message");
    let upper = Flag::new("u", "upper")?.store_true().with_description("shout");
    let sep = Flag::new("s", "sep")?.with_description("separator between words");

    let parser = Parser::from_env(vec![help.clone(), upper.clone(), sep.clone()])
        .with_description("Prints its arguments.");

    let (matches, words) = match parser.parse() {
        Ok(it) => it,
        Err(err) => {
            eprintln!("{}\n\n{}", err, parser.usage());
            std::process::exit(2)
        }
    };

    if matches.get_flag(&help)?.present {
        println!("{}", parser.help());
        return Ok(());
    }

    let sep = matches.get_flag(&sep)?;
    let sep = if sep.present { sep.value.as_str() } else { " " };
    let text = words.join(sep);
    if matches.get_flag(&upper)?.present {
        println!("{}", text.to_uppercase());
    } else {
        println!("{}", text);
    }
    Ok(())
}
