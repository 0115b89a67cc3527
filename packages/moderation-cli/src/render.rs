//! Terminal rendering of a board snapshot.

use comment_board::{BoardError, BoardView, ViewNode};
use console::style;

pub fn print_board(view: &BoardView) {
    if view.is_empty() {
        println!();
        println!("{}", style("No comments.").dim());
        return;
    }

    print_list("Pending", &view.pending);
    print_list("Approved", &view.approved);
}

fn print_list(title: &str, nodes: &[ViewNode]) {
    println!();
    println!(
        "{} {}",
        style(title).bold().cyan(),
        style(format!("({})", nodes.len())).dim()
    );

    if nodes.is_empty() {
        println!("  {}", style("(none)").dim());
        return;
    }

    for node in nodes {
        println!("  {} {}", style(format!("#{}", node.comment_id)).dim(), node);
    }
}

pub fn print_error(context: &str, err: &dyn std::fmt::Display) {
    println!();
    println!("{} {}: {}", style("✗").red().bold(), style(context).red(), err);
}

/// An applied change whose reload failed is a warning, not a failure: the
/// server already has it, so the action must not be repeated.
pub fn print_action_error(err: &BoardError) {
    println!();
    if err.is_applied() {
        println!("{} {}", style("!").yellow().bold(), style(err).yellow());
        println!("  {}", style("Choose Reload to refresh the lists.").dim());
    } else {
        println!("{} {}", style("✗").red().bold(), style(err).red());
    }
}
