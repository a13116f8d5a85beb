use std::{env, fs::read_to_string, process, time::Instant};

use exprparse::{
    display_error,
    lexer::lexer::{tokenize, Tokenizer, TokenizerConfig},
    parser::parser::Parser,
};

struct Options {
    source: String,
    file: Option<String>,
    show_tokens: bool,
    show_tree: bool,
}

fn usage() -> ! {
    eprintln!("Usage: exprparse [--tokens] [--tree] (<expression> | --file <path>)");
    process::exit(2);
}

fn parse_args() -> Options {
    let mut args = env::args().skip(1);
    let mut show_tokens = false;
    let mut show_tree = false;
    let mut file = None;
    let mut source = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--tokens" => show_tokens = true,
            "--tree" => show_tree = true,
            "--file" => {
                let Some(path) = args.next() else { usage() };
                match read_to_string(&path) {
                    Ok(contents) => source = Some(contents),
                    Err(err) => {
                        eprintln!("Failed to read {}: {}", path, err);
                        process::exit(1);
                    }
                }
                file = Some(path);
            }
            _ if source.is_none() => source = Some(arg),
            _ => usage(),
        }
    }

    let Some(source) = source else { usage() };

    Options {
        source,
        file,
        show_tokens,
        show_tree,
    }
}

fn main() {
    let options = parse_args();
    let source = options.source.as_str();

    let start = Instant::now();

    if options.show_tokens {
        match tokenize(source, options.file.clone()) {
            Ok(tokens) => tokens.iter().for_each(|token| token.debug()),
            Err(error) => {
                display_error(&error, source);
                process::exit(1);
            }
        }

        println!("Tokenized in {:?}", start.elapsed());
        return;
    }

    let tokenizer = match Tokenizer::new(TokenizerConfig {
        file: options.file.clone(),
        ..TokenizerConfig::default()
    }) {
        Ok(tokenizer) => tokenizer,
        Err(error) => {
            display_error(&error, source);
            process::exit(1);
        }
    };

    let parse_start = Instant::now();
    let result = Parser::new(&tokenizer, source, 0).and_then(|mut parser| {
        let node = parser.parse()?;
        Ok((node, parser.at_eof(), parser.current_token().clone()))
    });

    let (ast, at_eof, trailing) = match result {
        Ok(parsed) => parsed,
        Err(error) => {
            display_error(&error, source);
            process::exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());

    if !at_eof {
        println!(
            "Warning: input continues after the expression at offset {} ({})",
            trailing.span.start.0, trailing.value
        );
    }

    println!("{}", ast);
    if options.show_tree {
        println!("{}", pretty_print(format!("{:?}", ast)));
    }
    println!("Total time: {:?}", start.elapsed());
}

fn pretty_print(string: String) -> String {
    let mut result = String::new();
    let mut indent: usize = 0;
    let mut ignore_next_space = false;

    for c in string.chars() {
        match c {
            '{' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            },
            '(' | '[' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
            },
            '}' | ')' | ']' => {
                indent = indent.saturating_sub(1);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                result.push(c);
            },
            ',' => {
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            },
            ' ' if ignore_next_space => {
                ignore_next_space = false;
            },
            _ => result.push(c),
        }
    }

    result
}
