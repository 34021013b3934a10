// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use clap::CommandFactory;
use std::collections::{HashMap, HashSet};
use yare::parameterized;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

/// Only these short flags may exist, and each must map to the same long flag
/// everywhere it is used.
#[test]
fn short_flags_are_consistent() {
    let allowed: HashMap<char, &str> = [
        ('v', "verbose"),
        ('V', "version"),
        ('o', "output"),
        ('c', "category"),
        ('b', "budget"),
        ('w', "weight"),
        ('d', "due"),
        ('t', "timeframe"),
    ]
    .into_iter()
    .collect();

    let mut cmd = Cli::command();
    cmd.build();
    let mut errors = Vec::new();
    let mut used = HashSet::new();
    check_command_flags(&cmd, &allowed, &mut errors, &mut used);

    for (short, long) in &allowed {
        if !used.contains(short) {
            errors.push(format!("-{short} (--{long}) is allowed but never used"));
        }
    }
    assert!(errors.is_empty(), "flag violations:\n{}", errors.join("\n"));
}

fn check_command_flags(
    cmd: &clap::Command,
    allowed: &HashMap<char, &str>,
    errors: &mut Vec<String>,
    used: &mut HashSet<char>,
) {
    for arg in cmd.get_arguments() {
        let Some(short) = arg.get_short() else {
            continue;
        };
        let long = arg.get_long();
        if short == 'h' && long == Some("help") {
            continue;
        }
        used.insert(short);
        match allowed.get(&short) {
            Some(expected) if long == Some(*expected) => {}
            Some(expected) => errors.push(format!(
                "{}: -{short} should map to --{expected}",
                cmd.get_name()
            )),
            None => errors.push(format!("{}: -{short} is not allowed", cmd.get_name())),
        }
    }
    for sub in cmd.get_subcommands() {
        check_command_flags(sub, allowed, errors, used);
    }
}

#[test]
fn post_with_all_fields() {
    let cli = parse(&[
        "hh",
        "post",
        "Buy groceries",
        "-c",
        "shopping",
        "-b",
        "1500",
        "-w",
        "12.5",
        "--due",
        "2026-06-01",
        "--description",
        "Milk",
        "--store",
        "Westgate",
        "--deliver-to",
        "Kilimani",
        "-o",
        "json",
    ])
    .unwrap();

    match cli.command {
        Command::Post {
            title,
            job,
            draft,
            offline,
            strict,
            output,
        } => {
            assert_eq!(title, "Buy groceries");
            assert_eq!(job.category, JobCategory::Shopping);
            assert_eq!(job.budget, 1500.0);
            assert_eq!(job.weight, Some(12.5));
            assert_eq!(job.due.as_deref(), Some("2026-06-01"));
            assert_eq!(job.description.as_deref(), Some("Milk"));
            assert_eq!(job.store.as_deref(), Some("Westgate"));
            assert_eq!(job.deliver_to.as_deref(), Some("Kilimani"));
            assert!(!draft && !offline && !strict);
            assert_eq!(output.output, OutputFormat::Json);
        }
        _ => unreachable!("expected post"),
    }
}

#[parameterized(
    empty_title = { &["hh", "post", "  ", "-c", "survey", "-b", "10"] },
    missing_budget = { &["hh", "post", "Job", "-c", "survey"] },
    negative_budget = { &["hh", "post", "Job", "-c", "survey", "-b", "-5"] },
    unknown_category = { &["hh", "post", "Job", "-c", "cleaning", "-b", "10"] },
    draft_and_offline = { &["hh", "post", "Job", "-c", "survey", "-b", "10", "--draft", "--offline"] },
    bad_weight_option = { &["hh", "guide", "-c", "shopping", "-w", "heavy", "-b", "25k", "-t", "flexible"] },
    bad_timeframe = { &["hh", "guide", "-c", "survey", "-b", "25k", "-t", "tomorrow"] },
    drafts_without_subcommand = { &["hh", "drafts"] },
)]
fn rejects_invalid_arguments(args: &[&str]) {
    assert!(parse(args).is_err());
}

#[test]
fn guide_parses_enumerated_options() {
    let cli = parse(&[
        "hh", "guide", "-c", "delivery", "-w", "over-50", "-b", "5000", "-t", "same-day", "--keep",
    ])
    .unwrap();

    match cli.command {
        Command::Guide {
            category,
            weight,
            budget,
            timeframe,
            keep,
            ..
        } => {
            assert_eq!(category, JobCategory::Delivery);
            assert_eq!(weight, Some(WeightOption::Over50));
            assert_eq!(budget, BudgetOption::Custom(5000.0));
            assert_eq!(timeframe, Timeframe::SameDay);
            assert!(keep);
        }
        _ => unreachable!("expected guide"),
    }
}

#[test]
fn global_flags_apply_after_subcommand() {
    let cli = parse(&["hh", "drafts", "list", "--config", "/tmp/hh.toml", "-v"]).unwrap();

    assert!(cli.verbose);
    assert_eq!(cli.config, Some(std::path::PathBuf::from("/tmp/hh.toml")));
    assert!(matches!(cli.command, Command::Drafts(DraftsCommand::List { .. })));
}

#[test]
fn drafts_remove_takes_id() {
    let cli = parse(&["hh", "drafts", "remove", "job-1a2b3c4d"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Drafts(DraftsCommand::Remove { ref id }) if id == "job-1a2b3c4d"
    ));
}

#[test]
fn sync_defaults_to_single_pass() {
    let cli = parse(&["hh", "sync"]).unwrap();
    assert!(matches!(cli.command, Command::Sync { watch: false, .. }));
}
