// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: module source path
fn module_arg() -> Arg {
    Arg::new("module")
        .required(true)
        .help("Module source: a .rs file or a directory with mod.rs/lib.rs")
}

/// Common argument: unresolved re-exports are errors
fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Fail on re-exports that cannot be resolved from source")
}

fn build_cli() -> Command {
    Command::new("docnav")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Docnav Contributors")
        .about("Generate and verify sidebar navigation indexes")
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .global(true)
                .help("Path to the configuration file"),
        )
        .subcommand(
            Command::new("generate")
                .about("Build the sidebar index for a module from its source")
                .arg(module_arg())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .help("Write to this file instead of stdout"),
                )
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .value_parser(["init-call", "window", "json"])
                        .help("Output format (default from config)"),
                )
                .arg(strict_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Check that a sidebar file matches its module's public declarations")
                .arg(module_arg())
                .arg(Arg::new("index").required(true).help("Sidebar file to verify"))
                .arg(strict_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Print the entries of a sidebar file")
                .arg(Arg::new("index").required(true).help("Sidebar file"))
                .arg(
                    Arg::new("kind")
                        .short('k')
                        .long("kind")
                        .help("Only show this kind (fn, struct, enum, ...)"),
                ),
        )
        .subcommand(
            Command::new("lookup")
                .about("Look up one entry in a sidebar file")
                .arg(Arg::new("index").required(true).help("Sidebar file"))
                .arg(Arg::new("kind").required(true).help("Item kind"))
                .arg(Arg::new("name").required(true).help("Item identifier")),
        )
        .subcommand(
            Command::new("registry")
                .about("Package registry operations")
                .subcommand_required(true)
                .subcommand(
                    Command::new("search")
                        .about("Search the registry for crates")
                        .arg(Arg::new("query").required(true).help("Search query"))
                        .arg(
                            Arg::new("limit")
                                .short('l')
                                .long("limit")
                                .default_value("10")
                                .help("Maximum number of results"),
                        ),
                )
                .subcommand(
                    Command::new("owner")
                        .about("Manage crate owners")
                        .arg(Arg::new("krate").required(true).help("Crate name"))
                        .arg(
                            Arg::new("add")
                                .short('a')
                                .long("add")
                                .value_name("LOGIN")
                                .action(ArgAction::Append)
                                .help("Users to invite as owners"),
                        )
                        .arg(
                            Arg::new("remove")
                                .short('r')
                                .long("remove")
                                .value_name("LOGIN")
                                .action(ArgAction::Append)
                                .help("Users to remove from the owners"),
                        )
                        .arg(
                            Arg::new("list")
                                .short('l')
                                .long("list")
                                .action(ArgAction::SetTrue)
                                .help("List current owners"),
                        ),
                )
                .subcommand(
                    Command::new("yank")
                        .about("Yank a version so new lockfiles stop selecting it")
                        .arg(Arg::new("krate").required(true).help("Crate name"))
                        .arg(Arg::new("version").required(true).help("Version to yank"))
                        .arg(
                            Arg::new("undo")
                                .long("undo")
                                .action(ArgAction::SetTrue)
                                .help("Undo a previous yank"),
                        ),
                )
                .subcommand(
                    Command::new("publish")
                        .about("Upload a packaged crate")
                        .arg(
                            Arg::new("metadata")
                                .required(true)
                                .help("JSON file with the crate metadata"),
                        )
                        .arg(Arg::new("tarball").required(true).help("The .crate tarball")),
                )
                .subcommand(
                    Command::new("login")
                        .about("Save an API token to the config file")
                        .arg(Arg::new("token").required(true).help("API token")),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "elvish", "fish", "powershell", "zsh"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("docnav.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
