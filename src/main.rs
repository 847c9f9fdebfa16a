use anyhow::{bail, Result};
use clap::Parser;

use tool_catalog::cli::{AddArgs, Cli, Command, EditArgs};
use tool_catalog::{
    logging, sort_tools, CatalogError, ComparisonTable, Configuration, SaveStatus, SortKey, Tool,
    ToolStore,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Configuration::from(cli.storage);
    let command = cli.command.unwrap_or(Command::Ui);

    // The terminal UI owns the screen, so its logs always go to a file
    if command == Command::Ui {
        logging::init(Some(config.ui_log_file().as_path()))?;
    } else {
        logging::init(config.log_file.as_deref())?;
    }

    let mut store = config.open_store()?;

    match command {
        Command::Ui => run_ui_mode(&mut store)?,
        Command::List {
            query,
            category,
            sort,
            json,
        } => run_list(&store, &query, &category, &sort, json)?,
        Command::Show { id } => run_show(&store, &id)?,
        Command::Add(args) => run_add(&mut store, args)?,
        Command::Edit(args) => run_edit(&mut store, &args)?,
        Command::Remove { id } => run_remove(&mut store, &id),
        Command::Compare { ids } => run_compare(&mut store, &ids)?,
        Command::Categories => run_categories(&store),
    }

    Ok(())
}

fn report(status: &SaveStatus) {
    if let Some(warning) = status.warning() {
        eprintln!("⚠️  {}", warning);
    }
}

fn print_field_errors(err: &CatalogError) {
    if let CatalogError::InvalidFields(fields) = err {
        eprintln!("❌ Tool not saved:");
        for field in fields {
            eprintln!("   • {}", field);
        }
    }
}

fn run_list(store: &ToolStore, query: &str, category: &str, sort: &str, json: bool) -> Result<()> {
    let mut tools = store.query(query, category);
    sort_tools(&mut tools, SortKey::parse_or_default(sort));

    if json {
        println!("{}", serde_json::to_string_pretty(&tools)?);
        return Ok(());
    }

    if tools.is_empty() {
        println!("No tools found");
        return Ok(());
    }

    println!(
        "{:<38} {:<24} {:<12} {:<22} {:>6}",
        "ID", "NAME", "CATEGORY", "DEVELOPER", "RATING"
    );
    for tool in &tools {
        println!(
            "{:<38} {:<24} {:<12} {:<22} {:>6}",
            tool.id,
            tool.name,
            tool.category.label(),
            tool.developer,
            tool_catalog::comparison::rating_cell(tool)
        );
    }
    println!("\n{} of {} tools", tools.len(), store.len());

    Ok(())
}

fn print_tool(tool: &Tool) {
    println!("🔧 {}", tool.name);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("ID:          {}", tool.id);
    println!("Developer:   {}", tool.developer);
    println!("Category:    {}", tool.category.label());
    println!("Website:     {}", tool.url);
    println!("Rating:      {}", tool_catalog::comparison::rating_cell(tool));
    println!("Pricing:     {}", tool.pricing.as_deref().unwrap_or("Not specified"));
    println!("API access:  {}", if tool.api_access { "Yes" } else { "No" });
    println!("Tags:        {}", tool.tags.join(", "));
    println!("Added:       {}", tool.created_at);
    println!("\n{}", tool.description);
}

fn run_show(store: &ToolStore, id: &str) -> Result<()> {
    match store.get_by_id(id) {
        Some(tool) => {
            print_tool(tool);
            Ok(())
        }
        None => bail!(CatalogError::NotFound(id.to_string())),
    }
}

fn run_add(store: &mut ToolStore, args: AddArgs) -> Result<()> {
    let tool = args.into_draft().into_tool().inspect_err(print_field_errors)?;
    let id = tool.id.clone();
    let name = tool.name.clone();

    let status = store.create(tool)?;
    report(&status);
    println!("✓ Added {} ({})", name, id);

    Ok(())
}

fn run_edit(store: &mut ToolStore, args: &EditArgs) -> Result<()> {
    let patch = args.to_patch();
    if patch.is_empty() {
        bail!("Nothing to change: pass at least one field to edit");
    }

    patch
        .validate()
        .map_err(CatalogError::InvalidFields)
        .inspect_err(print_field_errors)?;

    let status = store.update(&args.id, patch)?;
    report(&status);
    if let Some(tool) = store.get_by_id(&args.id) {
        println!("✓ Updated {}", tool.name);
    }

    Ok(())
}

fn run_remove(store: &mut ToolStore, id: &str) {
    let name = store.get_by_id(id).map(|t| t.name.clone());
    let status = store.delete(id);
    report(&status);

    match name {
        Some(name) => println!("✓ Removed {}", name),
        None => println!("Nothing to remove: no tool with id {}", id),
    }
}

fn run_compare(store: &mut ToolStore, ids: &[String]) -> Result<()> {
    for id in ids {
        if store.get_by_id(id).is_none() {
            bail!(CatalogError::NotFound(id.clone()));
        }
        if !store.is_selected(id) {
            store.toggle_selection(id);
        }
    }

    let table = ComparisonTable::build(&store.selected_tools());

    print!("{:<12}", "");
    for name in &table.tool_names {
        print!(" │ {:<28}", name);
    }
    println!();
    for row in &table.rows {
        print!("{:<12}", row.label);
        for value in &row.values {
            print!(" │ {:<28}", value);
        }
        println!();
    }

    Ok(())
}

fn run_categories(store: &ToolStore) {
    println!("🏷️  Categories");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━");
    for (category, count) in store.category_counts() {
        println!("{:<12} {:>4}", category.label(), count);
    }
    println!("━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{:<12} {:>4}", "Total", store.len());
}

#[cfg(feature = "tui")]
fn run_ui_mode(store: &mut ToolStore) -> Result<()> {
    use tool_catalog::ui;

    let mut app = ui::App::new(store);
    ui::run_ui(&mut app)?;

    println!("✅ UI closed");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_store: &mut ToolStore) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use a subcommand, e.g. `tool-catalog list`");
    std::process::exit(1);
}
