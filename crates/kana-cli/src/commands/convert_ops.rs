use std::io::{self, BufRead};

use serde::Serialize;

use kana_core::romaji::{convert_with, RomajiConvertResult, RomajiTable};
use kana_core::settings::settings;

#[derive(Serialize)]
struct ConvertOutput<'a> {
    input: &'a str,
    display: String,
    #[serde(flatten)]
    result: RomajiConvertResult,
}

/// Convert each argument, or each stdin line when there are none.
pub fn convert_cmd(inputs: &[String], steps: bool, json: bool) {
    if inputs.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = die!(line, "Error reading stdin: {}");
            convert_one(&line, steps, json);
        }
    } else {
        for input in inputs {
            convert_one(input, steps, json);
        }
    }
}

fn convert_one(input: &str, steps: bool, json: bool) {
    if steps {
        // What the player sees after each keystroke.
        for (end, c) in input.char_indices() {
            print_result(&input[..end + c.len_utf8()], json, true);
        }
    } else {
        print_result(input, json, false);
    }
}

fn print_result(input: &str, json: bool, indent: bool) {
    let result = convert_with(RomajiTable::global(), input, settings().limits());
    if json {
        let out = ConvertOutput {
            input,
            display: result.display(),
            result,
        };
        println!("{}", die!(serde_json::to_string(&out), "Error: {}"));
        return;
    }

    let pad = if indent { "  " } else { "" };
    println!("{pad}{input}\t{}", result.display());
    if result.truncated {
        eprintln!(
            "{pad}warning: output full, {} input chars dropped",
            result.dropped
        );
    }
    if result.forced > 0 {
        eprintln!(
            "{pad}warning: {} chars forced out of a full pending buffer",
            result.forced
        );
    }
}
