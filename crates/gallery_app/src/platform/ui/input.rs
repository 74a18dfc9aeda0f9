use gallery_core::{Msg, PricingOption, ScrollSample, SortKey};

/// One line typed at the gallery prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Msg),
    ShowUrl,
    Help,
    Quit,
}

/// Usage and description of every prompt command.
const COMMANDS: &[(&str, &str)] = &[
    ("search <text>", "filter by title or creator (empty clears)"),
    ("toggle paid|free|view", "flip a pricing filter"),
    ("sort name|high|low", "order by name, highest or lowest price"),
    ("reset", "clear pricing filters"),
    ("more", "load the next page"),
    ("scroll <top> <viewport> <content>", "report a scroll position"),
    ("reload", "start again from the first page"),
    ("open <url or query>", "navigate to a shared link"),
    ("url", "print the current link"),
    ("quit", "leave the gallery"),
];

/// The command list, descriptions aligned past the widest usage.
pub fn help_text() -> String {
    let width = COMMANDS.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
    let mut text = String::from("commands:");
    for (usage, description) in COMMANDS {
        text.push_str(&format!("\n  {usage:<width$}  {description}"));
    }
    text
}

/// Parses one input line; `Err` carries a message for the user.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let msg = match word.to_ascii_lowercase().as_str() {
        "" | "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        "url" => return Ok(Command::ShowUrl),
        "search" => Msg::SearchChanged(rest.to_string()),
        "toggle" => {
            let option = PricingOption::from_param_name(&rest.to_ascii_lowercase())
                .ok_or_else(|| format!("unknown pricing option {rest:?} (paid, free, view)"))?;
            Msg::FilterToggled(option)
        }
        "sort" => {
            let key = SortKey::from_name(rest)
                .ok_or_else(|| format!("unknown sort {rest:?} (name, high, low)"))?;
            Msg::SortChanged(key)
        }
        "reset" => Msg::FiltersReset,
        "more" => Msg::MoreRequested,
        "reload" => Msg::ReloadRequested,
        "scroll" => Msg::Scrolled(parse_scroll(rest)?),
        "open" => Msg::Navigated {
            query: query_part(rest).to_string(),
        },
        other => return Err(format!("unknown command {other:?}; type help")),
    };
    Ok(Command::Dispatch(msg))
}

fn parse_scroll(args: &str) -> Result<ScrollSample, String> {
    let numbers: Vec<u32> = args
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|err| format!("scroll expects three numbers: {err}"))?;
    match numbers.as_slice() {
        [scroll_top, viewport_height, content_height] => Ok(ScrollSample {
            scroll_top: *scroll_top,
            viewport_height: *viewport_height,
            content_height: *content_height,
        }),
        _ => Err("scroll expects <top> <viewport> <content>".to_string()),
    }
}

/// The query string of a full URL, or the input itself when it has no `?`.
pub fn query_part(link: &str) -> &str {
    let without_fragment = link.split('#').next().unwrap_or(link);
    match without_fragment.split_once('?') {
        Some((_, query)) => query,
        None => without_fragment,
    }
}
