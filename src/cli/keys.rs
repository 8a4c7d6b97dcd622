//! Keys command implementation

use anyhow::Result;
use owo_colors::OwoColorize;

use pixelfolio::easter_eggs::{EasterEggs, EggEffect, SpriteReaction};
use pixelfolio::navigation::{NavCommand, Navigator};
use pixelfolio::Config;

use super::open_progress;

/// Expand arguments into key presses. Named keys ("ArrowUp", "Enter") pass
/// through; anything else is typed one character at a time.
pub fn expand_keys(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| {
            let named = arg.chars().count() > 1
                && arg.chars().next().is_some_and(|c| c.is_ascii_uppercase());
            if named {
                vec![arg.clone()]
            } else {
                arg.chars().map(String::from).collect()
            }
        })
        .collect()
}

/// Feed key presses (and sprite clicks) through the easter-egg detectors
pub async fn keys_command(config: &Config, keys: Vec<String>, clicks: u32) -> Result<()> {
    let mut progress = open_progress(config)?;
    let mut eggs = EasterEggs::new();
    let mut nav = Navigator::new(config.progression.sections.clone());

    for key in expand_keys(&keys) {
        if let Some(command) = NavCommand::from_key(&key, false) {
            if let Some(target) = nav.target(command).map(str::to_string) {
                nav.on_section_enter(&target, &mut progress);
            }
        }

        for effect in eggs.on_key(&key, false, &mut progress) {
            print_effect(effect);
        }
    }

    for _ in 0..clicks {
        print_effect(eggs.on_sprite_click(&mut progress));
    }

    Ok(())
}

fn print_effect(effect: EggEffect) {
    match effect {
        EggEffect::KonamiBurst => println!("  {}", "~*~ GOLDEN BURST ~*~".bright_yellow().bold()),
        EggEffect::Language { spanish } => {
            println!("  Language: {}", if spanish { "español" } else { "English" })
        }
        EggEffect::SecretMessage(message) => println!("  {}", message.bright_yellow()),
        EggEffect::Sprite(SpriteReaction::Wave) => println!("  *waves*"),
        EggEffect::Sprite(reaction) => {
            if let Some(line) = reaction.line() {
                println!("  \"{}\"", line.cyan());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_keys() {
        let args = vec!["ArrowUp".to_string(), "hola".to_string(), "b".to_string()];
        assert_eq!(expand_keys(&args), vec!["ArrowUp", "h", "o", "l", "a", "b"]);
    }
}
