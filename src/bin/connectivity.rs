/// connectivity - streaming union-find client
///
/// Reads whitespace-separated integers from stdin: first the universe size,
/// then p q index pairs. Each pair joining two previously unconnected
/// components is unioned and echoed to stdout; already-connected pairs are
/// consumed silently.
use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use std::io::{self, BufRead};

use percolate::error::Error;
use percolate::union_find::{QuickFind, QuickUnion, WeightedQuickUnion};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Variant {
    /// Constant-time find, linear-time union
    QuickFind,
    /// Unbalanced parent-pointer trees
    QuickUnion,
    /// Union by size
    Weighted,
    /// Union by size with path halving
    Compressed,
}

#[derive(Parser, Debug)]
#[clap(
    name = "connectivity",
    about = "Incremental connectivity over index pairs read from stdin"
)]
struct Args {
    /// Union-find variant to run the pairs through
    #[clap(short = 'u', long = "variant", value_enum, default_value_t = Variant::Compressed)]
    variant: Variant,
}

enum UnionFind {
    QuickFind(QuickFind),
    QuickUnion(QuickUnion),
    Weighted(WeightedQuickUnion),
}

impl UnionFind {
    fn build(variant: Variant, n: usize) -> Result<Self, Error> {
        Ok(match variant {
            Variant::QuickFind => UnionFind::QuickFind(QuickFind::new(n)?),
            Variant::QuickUnion => UnionFind::QuickUnion(QuickUnion::new(n)?),
            Variant::Weighted => UnionFind::Weighted(WeightedQuickUnion::new(n)?),
            Variant::Compressed => {
                UnionFind::Weighted(WeightedQuickUnion::with_path_compression(n)?)
            }
        })
    }

    fn connected(&mut self, p: usize, q: usize) -> Result<bool, Error> {
        match self {
            UnionFind::QuickFind(uf) => uf.connected(p, q),
            UnionFind::QuickUnion(uf) => uf.connected(p, q),
            UnionFind::Weighted(uf) => uf.connected(p, q),
        }
    }

    fn union(&mut self, p: usize, q: usize) -> Result<(), Error> {
        match self {
            UnionFind::QuickFind(uf) => uf.union(p, q),
            UnionFind::QuickUnion(uf) => uf.union(p, q),
            UnionFind::Weighted(uf) => uf.union(p, q),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let stdin = io::stdin();
    let mut numbers = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        for token in line.split_whitespace() {
            let value: usize = token
                .parse()
                .with_context(|| format!("invalid index {token:?}"))?;
            numbers.push(value);
        }
    }

    let mut stream = numbers.into_iter();
    let n = stream.next().context("expected universe size on stdin")?;
    let mut uf = UnionFind::build(args.variant, n)?;

    let mut merged = 0usize;
    loop {
        let (p, q) = match (stream.next(), stream.next()) {
            (Some(p), Some(q)) => (p, q),
            (None, _) => break,
            (Some(p), None) => bail!("index {p} has no partner"),
        };
        if !uf.connected(p, q)? {
            uf.union(p, q)?;
            merged += 1;
            println!("{p} {q}");
        }
    }

    info!("{merged} pairs merged over a universe of {n}");
    Ok(())
}
