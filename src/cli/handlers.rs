use std::path::Path;

use crate::cli::commands::{AddArgs, Commands, IndexArgs, ListArgs, RmArgs};
use crate::io::config_io::resolve_task_file;
use crate::io::note_io::NoteError;
use crate::store::TaskStore;

/// Dispatch a subcommand against the resolved task file
pub fn dispatch(command: Commands, file: Option<&Path>) -> Result<(), NoteError> {
    let path = resolve_task_file(file)?;
    let mut store = TaskStore::load(path)?;

    match command {
        Commands::List(args) => cmd_list(&store, &args),
        Commands::Add(args) => cmd_add(&mut store, &args),
        Commands::Check(args) => cmd_set_checked(&mut store, &args, true),
        Commands::Uncheck(args) => cmd_set_checked(&mut store, &args, false),
        Commands::Rm(args) => cmd_rm(&mut store, &args),
    }
}

fn cmd_list(store: &TaskStore, args: &ListArgs) -> Result<(), NoteError> {
    if args.json {
        let json = serde_json::to_string_pretty(store.tasks())
            .map_err(|e| NoteError::Io(e.into()))?;
        println!("{json}");
        return Ok(());
    }
    for (i, task) in store.tasks().iter().enumerate() {
        println!("{:>3}. [{}] {}", i + 1, task.checkbox_char(), task.text);
    }
    Ok(())
}

fn cmd_add(store: &mut TaskStore, args: &AddArgs) -> Result<(), NoteError> {
    let text = args.text.join(" ");
    if !store.add(&text) {
        return Err(NoteError::EmptyTask);
    }
    store.save()?;
    println!("added {}. {}", store.len(), text.trim());
    Ok(())
}

fn cmd_set_checked(
    store: &mut TaskStore,
    args: &IndexArgs,
    checked: bool,
) -> Result<(), NoteError> {
    let index = to_zero_based(args.index, store.len())?;
    store.set_checked(index, checked);
    store.save()?;
    let task = &store.tasks()[index];
    println!("{:>3}. [{}] {}", args.index, task.checkbox_char(), task.text);
    Ok(())
}

fn cmd_rm(store: &mut TaskStore, args: &RmArgs) -> Result<(), NoteError> {
    // validate every index before mutating anything
    let mut indices = Vec::with_capacity(args.indices.len());
    for &number in &args.indices {
        indices.push(to_zero_based(number, store.len())?);
    }
    let removed = store.remove_many(&indices);
    store.save()?;
    println!("removed {removed} task(s)");
    Ok(())
}

/// Convert a 1-based task number from the CLI into a list index
fn to_zero_based(number: usize, len: usize) -> Result<usize, NoteError> {
    if number == 0 || number > len {
        return Err(NoteError::OutOfRange { index: number, len });
    }
    Ok(number - 1)
}
