use clap::{Parser, Subcommand, ValueEnum};
use rireval::ircore::common::INDEX_PATH;
use rireval::ircore::config::Config;
use rireval::ircore::doc::DocParser;
use rireval::ircore::engine::Engine;
use rireval::ircore::{RankingAlgorithm, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[derive(Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
/// Ranks a test collection with VSM, BM25 and a Dirichlet language model
struct Cli {
    #[clap(short, long, value_parser, default_value_t = String::from(INDEX_PATH))]
    /// Index file
    index_path: String,
    #[clap(short, long, value_parser)]
    /// YAML configuration file
    config: Option<String>,
    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[derive(Debug)]
enum Commands {
    /// Build index
    Build {
        #[clap(long, value_parser)]
        /// Corpus file or directory
        corpus: String,
    },
    /// Rank a query file and write TREC runs
    Run {
        #[clap(short, long, value_parser)]
        /// Query file
        queries: String,
        #[clap(short, long, value_enum, default_value = "all")]
        /// Ranking model
        model: Model,
        #[clap(short, long, value_parser)]
        /// Directory for run files
        output_dir: Option<String>,
        #[clap(short = 'k', long, value_parser)]
        /// Results per query
        top_k: Option<usize>,
    },
    /// Rank the collection for one query
    Search {
        #[clap(value_parser)]
        /// Query text
        query: String,
        #[clap(short, long, value_enum, default_value = "bm25")]
        /// Ranking model
        model: Model,
    },
    /// Show collection statistics
    Stats {
        #[clap(long, value_parser, default_value_t = 20)]
        /// Most frequent terms to list
        top_terms: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Model {
    Vsm,
    Bm25,
    Lm,
    All,
}

impl Model {
    fn algorithms(&self, cfg: &Config) -> Vec<RankingAlgorithm> {
        match self {
            Model::Vsm => vec![cfg.vsm()],
            Model::Bm25 => vec![cfg.bm25()],
            Model::Lm => vec![cfg.lm()],
            Model::All => cfg.algorithms(),
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cfg = match &cli.config {
        Some(path) => Config::from_file(Path::new(path))?,
        None => Config::default(),
    };
    let index_path = Path::new(&cli.index_path);
    match &cli.command {
        Some(Commands::Build { corpus }) => command_build_index(&cfg, corpus, index_path),
        Some(Commands::Run { queries, model, output_dir, top_k }) => {
            let output_dir = output_dir
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(|| cfg.run.output_dir.clone());
            let top_k = top_k.unwrap_or(cfg.run.top_k);
            command_run(&cfg, index_path, queries, *model, &output_dir, top_k)
        }
        Some(Commands::Search { query, model }) => command_search(&cfg, index_path, query, *model),
        Some(Commands::Stats { top_terms }) => command_stats(index_path, *top_terms),
        None => command_load_index(index_path),
    }
}

fn command_build_index(cfg: &Config, corpus: &str, index_path: &Path) -> Result<()> {
    let engine =
        Engine::build_index_from(Path::new(corpus), &cfg.corpus, cfg.normalizer.clone())?;
    engine.save_to(index_path)?;
    println!("{} documents indexed", engine.doc_count());
    Ok(())
}

fn command_run(
    cfg: &Config,
    index_path: &Path,
    queries: &str,
    model: Model,
    output_dir: &Path,
    top_k: usize,
) -> Result<()> {
    let algorithms = model.algorithms(cfg);
    for algorithm in &algorithms {
        algorithm.validate()?;
    }
    let engine = Engine::load_from(index_path)?;
    let queries = DocParser::new(Path::new(queries), &cfg.corpus).queries()?;
    std::fs::create_dir_all(output_dir)?;
    for algorithm in &algorithms {
        let path = output_dir.join(algorithm.run_file_name());
        let writer = BufWriter::new(File::create(&path)?);
        engine.write_run(&queries, algorithm, top_k, writer)?;
        println!("{} written to {}", algorithm.run_label(), path.display());
    }
    Ok(())
}

fn command_search(cfg: &Config, index_path: &Path, query: &str, model: Model) -> Result<()> {
    let engine = Engine::load_from(index_path)?;
    println!("index of {} documents loaded", engine.doc_count());
    for algorithm in model.algorithms(cfg) {
        let result = engine.exec_query(query, &algorithm)?;
        println!("{}: {} results", algorithm.name(), result.len());
        if result.len() > 10 {
            println!("top 10:");
        }
        for (i, (doc, score)) in result.iter().take(10).enumerate() {
            println!("{}:{} {:.6}", i + 1, doc, score);
        }
    }
    Ok(())
}

fn command_stats(index_path: &Path, top_terms: usize) -> Result<()> {
    let engine = Engine::load_from(index_path)?;
    let stats = engine.stats(top_terms);
    println!("documents: {}", stats.document_count);
    println!("tokens: {}", stats.total_tokens);
    println!("average document length: {:.2}", stats.average_document_length);
    println!("terms: {}", stats.term_count);
    for (term, count) in &stats.term_freq {
        println!("{}\t{}", term, count);
    }
    Ok(())
}

fn command_load_index(index_path: &Path) -> Result<()> {
    let engine = Engine::load_from(index_path)?;
    println!("index of {} documents loaded", engine.doc_count());
    Ok(())
}
