use restbind::{bind_arguments, parse_candidate, register_handler, CoreError, HandlerParameters, RawValue, DEFAULT_READERS};
use std::collections::HashMap;

const USAGE: &str = "uso: restbind <handler> <arity> <source:name[:type:index]>... [--value <name>=<raw>]... [--body <raw>]";

fn main() {
    // Cargar .env si existe (RESTBIND_TRIM_TOKENS, RESTBIND_STRICT_OVERRIDES)
    let _ = dotenvy::dotenv();
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 || args[0] == "--help" {
        println!("{USAGE}");
        return;
    }
    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), CoreError> {
    let handler = &args[0];
    let arity: usize = args[1]
        .parse()
        .map_err(|_| CoreError::Config(format!("invalid arity '{}'", args[1])))?;

    let mut parameters = HandlerParameters::new(handler.as_str());
    let mut values: HashMap<String, String> = HashMap::new();
    let mut body: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--value" => {
                i += 1;
                let pair = args.get(i).ok_or_else(|| CoreError::Config("--value needs <name>=<raw>".into()))?;
                let (name, raw) = pair
                    .split_once('=')
                    .ok_or_else(|| CoreError::Config(format!("invalid --value '{pair}'")))?;
                values.insert(name.to_string(), raw.to_string());
            }
            "--body" => {
                i += 1;
                body = args.get(i).cloned();
            }
            candidate => {
                parameters.add(parse_candidate(candidate)?);
            }
        }
        i += 1;
    }

    let registry = &*DEFAULT_READERS;
    let resolved = register_handler(&parameters, arity, registry)?;
    println!("{}", serde_json::to_string_pretty(&resolved)?);

    if values.is_empty() && body.is_none() {
        return Ok(());
    }
    let arguments = bind_arguments(&resolved, registry, |descriptor| {
        if descriptor.is_body() {
            body.as_deref().map(|b| RawValue::Body(b.as_bytes()))
        } else {
            values.get(descriptor.name()).map(|v| RawValue::Token(v.as_str()))
        }
    })?;
    for (descriptor, value) in resolved.iter().zip(arguments) {
        println!("{descriptor} = {value}");
    }
    Ok(())
}
