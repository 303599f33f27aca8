use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use corpus_vectorizer::{Corpus, CorpusVectorizer, VectorizerData};
use log::{error, info};
use serde_json::json;

const DEFAULT_CORPUS: &str = "corpus.txt";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let program_start = Instant::now();

    // ---- argument handling ----
    // --corpus PATH     : newline-delimited corpus file (default: corpus.txt)
    // --components N    : default LSA rank for the `lsa` command (default: 2)
    let mut args = env::args().skip(1);
    let mut corpus_path = String::from(DEFAULT_CORPUS);
    let mut default_components = 2usize;
    while let Some(a) = args.next() {
        match a.as_str() {
            "--corpus" => {
                if let Some(v) = args.next() {
                    corpus_path = v;
                } else {
                    error!("--corpus requires a path");
                    return;
                }
            }
            "--components" => {
                match args.next().as_deref().map(str::parse::<usize>) {
                    Some(Ok(n)) if n > 0 => default_components = n,
                    _ => {
                        error!("--components needs a positive integer");
                        return;
                    }
                }
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            other => {
                error!("unknown argument: {other}");
                print_usage();
                return;
            }
        }
    }

    // ---- one-shot startup: corpus load + matrix build ----
    let corpus = Corpus::load(&corpus_path);
    let vectorizer: CorpusVectorizer = CorpusVectorizer::build(corpus);
    info!(
        "startup complete in {:.2}ms",
        program_start.elapsed().as_secs_f64() * 1000.0
    );
    println!(
        "{}",
        json!({
            "status": "ready",
            "documents_loaded": vectorizer.doc_count(),
            "vocabulary_size": vectorizer.vocab_size(),
        })
    );

    run_interactive(&vectorizer, default_components);
}

fn print_usage() {
    eprintln!("Usage: corpus-vectorizer [--corpus PATH] [--components N]");
    eprintln!("Interactive commands: info | tfidf | bow <text> | lsa [k] | save <path> | help | exit");
}

fn run_interactive(vectorizer: &CorpusVectorizer, default_components: usize) {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("Command> ");
        let _ = stdout.flush();
        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                error!("read error: {e}");
                break;
            }
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim()),
            None => (trimmed, ""),
        };
        match command {
            "exit" | "quit" => {
                info!("bye");
                break;
            }
            "help" => print_usage(),
            "info" => {
                println!(
                    "{}",
                    json!({
                        "status": "ready",
                        "documents_loaded": vectorizer.doc_count(),
                        "vocabulary_size": vectorizer.vocab_size(),
                    })
                );
            }
            "tfidf" => {
                let rows: Vec<Vec<f64>> = vectorizer
                    .tfidf()
                    .outer_iter()
                    .map(|row| row.to_vec())
                    .collect();
                println!("{}", json!({ "matrix": rows }));
            }
            "bow" => {
                let qv = vectorizer.bag_of_words(rest);
                println!(
                    "{}",
                    json!({ "vector": qv.vector, "matched_terms": qv.matched_terms })
                );
            }
            "lsa" => {
                let k = if rest.is_empty() {
                    default_components
                } else {
                    match rest.parse::<usize>() {
                        Ok(n) => n,
                        Err(_) => {
                            eprintln!("lsa needs an integer rank, got: {rest}");
                            continue;
                        }
                    }
                };
                match vectorizer.lsa(k) {
                    Ok(lsa) => {
                        let rows: Vec<Vec<f64>> = lsa
                            .projection
                            .outer_iter()
                            .map(|row| row.to_vec())
                            .collect();
                        println!(
                            "{}",
                            json!({
                                "matrix": rows,
                                "singular_values": lsa.singular_values,
                                "variance_explained": lsa.variance_explained,
                            })
                        );
                    }
                    Err(e) => println!("{}", json!({ "error": e.to_string() })),
                }
            }
            "save" => {
                if rest.is_empty() {
                    eprintln!("save needs a target path");
                    continue;
                }
                match save_snapshot(vectorizer, rest) {
                    Ok(()) => info!("snapshot written to {rest}"),
                    Err(e) => error!("snapshot failed: {e}"),
                }
            }
            other => eprintln!("unknown command: {other} (try `help`)"),
        }
    }
}

fn save_snapshot(
    vectorizer: &CorpusVectorizer,
    path: &str,
) -> corpus_vectorizer::Result<()> {
    let file = BufWriter::new(File::create(path)?);
    VectorizerData::from_vectorizer(vectorizer).save(file)
}
