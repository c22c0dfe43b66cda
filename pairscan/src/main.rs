/*
* Licensed to Elasticsearch B.V. under one or more contributor
* license agreements. See the NOTICE file distributed with
* this work for additional information regarding copyright
* ownership. Elasticsearch B.V. licenses this file to you under
* the Apache License, Version 2.0 (the "License"); you may
* not use this file except in compliance with the License.
* You may obtain a copy of the License at
*
*  http://www.apache.org/licenses/LICENSE-2.0
*
* Unless required by applicable law or agreed to in writing,
* software distributed under the License is distributed on an
* "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
* KIND, either express or implied.  See the License for the
* specific language governing permissions and limitations
* under the License.
*/

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use pairscan::{render_histogram, sweep_pairs, PairScanResult};
use rowcloud::generate::generate_csv;
use rowcloud::loaders::open_matrix_csv;
use rowcloud::L2;

#[derive(Parser)]
#[command(name = "pairscan")]
#[command(about = "Random matrix generation and pairwise row distance histograms", long_about = None)]
struct Cli {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate matrix
    Gen {
        /// Destination file
        #[arg(value_name = "DST")]
        destination: PathBuf,
        /// Matrix rows
        #[arg(value_name = "M", allow_negative_numbers = true)]
        m: i64,
        /// Matrix cols
        #[arg(value_name = "N", allow_negative_numbers = true)]
        n: i64,
    },
    /// Calculate matrix
    Calc {
        /// Source file
        #[arg(value_name = "SRC")]
        source: PathBuf,
        /// Destination image file (e.g. r.png)
        #[arg(value_name = "DST")]
        destination: PathBuf,
    },
}

fn run(cli: &Cli) -> PairScanResult<()> {
    match &cli.action {
        Action::Gen { destination, m, n } => {
            generate_csv(destination, *m, *n)?;
            Ok(())
        }
        Action::Calc {
            source,
            destination,
        } => {
            let matrix = open_matrix_csv::<_, L2>(source)?;
            let report = sweep_pairs(&matrix)?;
            render_histogram(&report, destination)
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        match e.validation() {
            // precondition misses are a user message, not a failure
            Some(v) => eprintln!("{}", v),
            None => {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
    }
}
