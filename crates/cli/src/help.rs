// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let literal = fg(colors::codes::LITERAL);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
        .invalid(fg(colors::codes::WARNING))
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_jobs}
  {post}        Post a job or keep it as a draft
  {drafts}      List, show or remove queued drafts
  {sync}        Send queued drafts to the backend

{header_checks}
  {validate}    Check a budget and weight against the rules
  {guide}       Walk through the posting checks
  {penalty}     Show cancellation and late penalties

{header_setup}
  {config}      Inspect configuration
  {completion}  Generate shell completions
",
        header_jobs = colors::header("Jobs:"),
        header_checks = colors::header("Checks:"),
        header_setup = colors::header("Setup:"),
        post = colors::literal("post"),
        drafts = colors::literal("drafts"),
        sync = colors::literal("sync"),
        validate = colors::literal("validate"),
        guide = colors::literal("guide"),
        penalty = colors::literal("penalty"),
        config = colors::literal("config"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  hh validate -b 500 -w 20                     Check a budget and weight
  hh post \"Buy groceries\" -c shopping -b 500   Post a job
  hh drafts list                               See what is waiting to sync
  hh sync                                      Send drafts now",
    )
}
