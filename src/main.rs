// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Gridsketch CLI entrypoint.
//!
//! Renders a JSON scene file to stdout. `-` reads the scene from stdin; `--schema` prints the
//! JSON schema scene files follow.

use std::error::Error;
use std::io::Read as _;

use gridsketch::config::{parse_bounds_policy, Config};
use gridsketch::render::BoundsPolicy;
use gridsketch::scene::{render_scene, scene_json_schema, Scene};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--bounds <error|ignore>] <scene.json>\n  {program} [--bounds <error|ignore>] -\n  {program} --schema\n\nRenders the scene to stdout. `-` reads the scene from stdin.\n--bounds overrides the scene's own bounds policy. Without either, {} picks the default (error).\n--schema prints the JSON schema for scene files.",
        gridsketch::config::BOUNDS_POLICY_ENV
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Stdin,
    File(String),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    schema: bool,
    bounds: Option<BoundsPolicy>,
    input: Option<Input>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--schema" => {
                if options.schema {
                    return Err(());
                }
                options.schema = true;
            }
            "--bounds" => {
                if options.bounds.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.bounds = Some(parse_bounds_policy(&raw).ok_or(())?);
            }
            "-" => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(Input::Stdin);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(Input::File(arg));
            }
        }
    }

    if options.schema {
        if options.input.is_some() || options.bounds.is_some() {
            return Err(());
        }
    } else if options.input.is_none() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "gridsketch".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.schema {
            println!("{}", scene_json_schema()?);
            return Ok(());
        }

        let config = Config::from_env()?;
        let json = match options.input {
            Some(Input::File(path)) => std::fs::read_to_string(&path)
                .map_err(|err| format!("failed to read {path}: {err}"))?,
            Some(Input::Stdin) | None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let mut scene = Scene::from_json(&json)?;
        if options.bounds.is_some() {
            scene.bounds_policy = options.bounds;
        }

        println!("{}", render_scene(&scene, config.bounds_policy_or_default())?);
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("gridsketch: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions, Input};
    use gridsketch::render::BoundsPolicy;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|arg| (*arg).to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn rejects_empty_args() {
        parse_options(std::iter::empty()).unwrap_err();
    }

    #[test]
    fn parses_scene_path() {
        let options = parse_options(args(&["scene.json"])).expect("parse options");
        assert_eq!(
            options,
            CliOptions {
                input: Some(Input::File("scene.json".to_owned())),
                ..CliOptions::default()
            }
        );
    }

    #[test]
    fn parses_stdin_with_bounds_in_any_order() {
        let options = parse_options(args(&["--bounds", "ignore", "-"])).expect("parse options");
        assert_eq!(options.input, Some(Input::Stdin));
        assert_eq!(options.bounds, Some(BoundsPolicy::Ignore));

        let options = parse_options(args(&["-", "--bounds", "ERROR"])).expect("parse options");
        assert_eq!(options.input, Some(Input::Stdin));
        assert_eq!(options.bounds, Some(BoundsPolicy::Error));
    }

    #[test]
    fn parses_schema_flag() {
        let options = parse_options(args(&["--schema"])).expect("parse options");
        assert!(options.schema);
        assert!(options.input.is_none());
    }

    #[test]
    fn rejects_schema_with_input() {
        parse_options(args(&["--schema", "scene.json"])).unwrap_err();
        parse_options(args(&["--bounds", "error", "--schema"])).unwrap_err();
    }

    #[test]
    fn rejects_bad_bounds() {
        parse_options(args(&["--bounds", "wrap", "scene.json"])).unwrap_err();
        parse_options(args(&["scene.json", "--bounds"])).unwrap_err();
    }

    #[test]
    fn rejects_unknown_and_duplicate_args() {
        parse_options(args(&["--nope", "scene.json"])).unwrap_err();
        parse_options(args(&["one.json", "two.json"])).unwrap_err();
        parse_options(args(&["-", "scene.json"])).unwrap_err();
        parse_options(args(&["--schema", "--schema"])).unwrap_err();
        parse_options(args(&["--bounds", "error", "--bounds", "ignore", "x.json"])).unwrap_err();
    }
}
