//! CLI entry point for portal-widgets
//!
//! Drives the page controllers from a terminal: browse and search the
//! service catalog, validate a contact message, change accessibility
//! preferences, watch the slider and talk to the support bot.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::*;
use portal_widgets::{
    config::{FileStorage, MemoryStorage, Settings},
    core::{service_info::has_detail, suggest::suggest, CategoryFilter},
    logging::init_cli_logger,
    ui::{
        contact::SubmitState,
        modal::ModalContent,
        render::{
            banner_text, chat_lines, faq_lines, form_error_lines, markup, overlay_lines,
            slider_dots,
        },
        PageEvent, PageLayout, Portal, SeededEntropy,
    },
};

#[derive(Parser)]
#[command(name = "portal-widgets")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the settings file
    #[arg(
        short,
        long,
        global = true,
        default_value = "~/.config/portal-widgets/settings.toml"
    )]
    config: PathBuf,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the service catalog
    Services {
        /// Category tab (all, citizen, business, digital)
        #[arg(short, long, default_value = "all")]
        tab: CategoryFilter,

        /// Search text, matched across every category
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Show the information panel of a service
    Info {
        /// Service title, e.g. "Passport Services"
        service: String,
    },

    /// Show search box suggestions
    Suggest {
        /// Text typed so far
        query: String,
    },

    /// Validate and submit a contact message
    Validate {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        message: String,
    },

    /// Show or change accessibility preferences
    Prefs {
        /// Step the font size (100% → 110% → 120% → 100%)
        #[arg(long)]
        cycle_font: bool,

        /// Toggle high contrast
        #[arg(long)]
        toggle_contrast: bool,
    },

    /// Watch the hero slider autoplay
    Slider {
        /// Number of slides
        #[arg(short, long, default_value_t = 3)]
        slides: usize,

        /// Autoplay intervals to simulate
        #[arg(short, long, default_value_t = 5)]
        ticks: u32,
    },

    /// Chat with the support bot
    Chat {
        /// Messages to send, one reply each
        #[arg(required = true)]
        messages: Vec<String>,

        /// Seed for reply choice and delay
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the FAQ
    Faq {
        /// Question to expand (0-based)
        #[arg(short, long)]
        open: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let settings = Settings::load(&cli.config)?;

    match cli.command {
        Commands::Services { tab, query } => list_services(settings, tab, query)?,
        Commands::Info { service } => show_info(settings, &service)?,
        Commands::Suggest { query } => show_suggestions(&settings, &query),
        Commands::Validate {
            name,
            email,
            phone,
            subject,
            message,
        } => submit_contact(
            settings,
            [
                ("name", name),
                ("email", email),
                ("phone", phone),
                ("subject", subject),
                ("message", message),
            ],
        )?,
        Commands::Prefs {
            cycle_font,
            toggle_contrast,
        } => update_prefs(settings, cycle_font, toggle_contrast)?,
        Commands::Slider { slides, ticks } => run_slider(settings, slides, ticks)?,
        Commands::Chat { messages, seed } => run_chat(settings, messages, seed)?,
        Commands::Faq { open } => show_faq(settings, open),
    }

    Ok(())
}

/// List the catalog under a tab, or the matches of a search across every tab
fn list_services(
    settings: Settings,
    tab: CategoryFilter,
    query: Option<String>,
) -> anyhow::Result<()> {
    let debounce = settings.search_debounce();
    let mut portal = Portal::new(settings, MemoryStorage::new());

    portal.handle(PageEvent::SelectTab(tab));
    if let Some(query) = query {
        portal.handle(PageEvent::CatalogSearch(query));
        portal.advance(debounce);
    }

    let services = portal.services();
    println!("{}\n", services.count_label().bold());

    if let Some(banner) = banner_text(&services.banner()) {
        println!("{} {}\n", "→".cyan(), banner);
    }

    for view in services.view().iter().filter(|v| v.visible) {
        let entry = &services.catalog()[view.index];
        println!(
            "{} {}",
            markup(&view.title).cyan().bold(),
            format!("[{}]", entry.category.token()).dimmed()
        );
        println!("  {}", markup(&view.description));
        for feature in &entry.features {
            println!("  {} {}", "•".green(), feature);
        }
        println!();
    }

    Ok(())
}

/// Open the information overlay for one service
fn show_info(settings: Settings, service: &str) -> anyhow::Result<()> {
    let mut portal = Portal::new(settings, MemoryStorage::new());
    if portal.services().entry(service).is_none() {
        println!("{} '{}' is not in the catalog", "⚠".yellow(), service);
    }
    if !has_detail(service) {
        println!("{} No detailed record, showing placeholder\n", "→".cyan());
    }

    portal.handle(PageEvent::OpenServiceInfo(service.to_string()));
    print_overlay(&portal);
    Ok(())
}

fn show_suggestions(settings: &Settings, query: &str) {
    let found = suggest(query, settings.suggestion_min_chars);
    if found.is_empty() {
        println!("{} No suggestions", "✗".red());
        return;
    }

    for item in found {
        println!("{} {}", "→".cyan(), item);
    }
}

/// Fill in the contact form, submit it and wait for the response
fn submit_contact(settings: Settings, values: [(&str, String); 5]) -> anyhow::Result<()> {
    let delay = settings.submit_delay();
    let mut portal = Portal::new(settings, MemoryStorage::new());

    for (field, value) in values {
        portal.handle(PageEvent::FieldInput {
            field: field.to_string(),
            value,
        });
    }
    portal.handle(PageEvent::SubmitContact);

    if portal.contact().state() != SubmitState::Sending {
        let errors = form_error_lines(portal.contact().errors());
        println!(
            "{} Found {} invalid field{}:\n",
            "✗".red().bold(),
            errors.len(),
            if errors.len() == 1 { "" } else { "s" }
        );
        for line in errors {
            println!("  {}", line.yellow());
        }
        std::process::exit(1);
    }

    println!("{} {}", "→".cyan(), portal.contact().submit_label());
    portal.advance(delay);

    println!("{} {}\n", "✓".green().bold(), "Message accepted".bold());
    print_overlay(&portal);
    Ok(())
}

/// Apply preference changes to the storage file
fn update_prefs(settings: Settings, cycle_font: bool, toggle_contrast: bool) -> anyhow::Result<()> {
    let storage = FileStorage::open(&settings.storage_path)?;
    let path = storage.path().to_path_buf();
    let mut portal = Portal::new(settings, storage);

    if cycle_font {
        portal.handle(PageEvent::CycleFontScale);
    }
    if toggle_contrast {
        portal.handle(PageEvent::ToggleContrast);
    }

    let scale = portal.font_scale();
    println!("{}", format!("Preferences from: {}\n", path.display()).bold());
    println!("  Font size:     {} ({})", scale.to_string().cyan(), scale.button_label());
    println!(
        "  High contrast: {}",
        if portal.high_contrast() { "on".green() } else { "off".dimmed() }
    );

    Ok(())
}

/// Simulate slider autoplay
fn run_slider(settings: Settings, slides: usize, ticks: u32) -> anyhow::Result<()> {
    let interval = settings.slide_interval();
    let layout = PageLayout {
        slides,
        ..PageLayout::default()
    };
    let mut portal = Portal::with_layout(settings, MemoryStorage::new(), layout);

    let Some(slider) = portal.chrome().slider() else {
        println!("{} No slides to show", "⚠".yellow());
        return Ok(());
    };
    println!("{:>8}  {}", "0 ms".dimmed(), slider_dots(slider));

    for _ in 0..ticks {
        portal.advance(interval);
        if let Some(slider) = portal.chrome().slider() {
            let at = format!("{} ms", portal.now().as_millis());
            println!("{:>8}  {}", at.dimmed(), slider_dots(slider));
        }
    }

    Ok(())
}

/// Send messages to the chat bot, waiting for each reply
fn run_chat(settings: Settings, messages: Vec<String>, seed: Option<u64>) -> anyhow::Result<()> {
    let wait = settings.chat_reply_min() + settings.chat_reply_jitter();
    let entropy = match seed {
        Some(seed) => SeededEntropy::from_seed(seed),
        None => SeededEntropy::from_os(),
    };
    let mut portal = Portal::new(settings, MemoryStorage::new()).with_entropy(entropy);

    portal.handle(PageEvent::OpenChat);
    for message in messages {
        portal.handle(PageEvent::ChatSend(message));
        portal.advance(wait);
    }

    let chat = portal
        .modal()
        .chat()
        .ok_or_else(|| anyhow::anyhow!("Chat window closed unexpectedly"))?;
    for line in chat_lines(chat) {
        println!("{}", line);
    }

    Ok(())
}

fn show_faq(settings: Settings, open: Option<usize>) {
    let mut portal = Portal::new(settings, MemoryStorage::new());
    if let Some(index) = open {
        portal.handle(PageEvent::ToggleFaq(index));
    }

    for line in faq_lines(portal.faq_items(), portal.faq()) {
        println!("{}", line);
    }
}

fn print_overlay(portal: &Portal<impl portal_widgets::Storage>) {
    let Some(overlay) = portal.modal().current() else {
        return;
    };

    let mut lines = overlay_lines(overlay).into_iter();
    if let Some(title) = lines.next() {
        let title = match overlay.content() {
            ModalContent::Success { .. } => title.green().bold(),
            _ => title.cyan().bold(),
        };
        println!("{}", title);
    }
    for line in lines {
        println!("{}", line);
    }
}
