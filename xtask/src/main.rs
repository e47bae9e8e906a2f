use std::{error::Error, fs, path::PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use components::{
    button, chat_bubble, checkbox, combobox, input, pin_input, switch, tag, time_picker,
    ComponentSize, InteractionState,
};
use designsystem::{contrast_ratio, css_vars_stylesheet, deep_merge_json, ThemeMode, WispTheme};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use settings::{load_layered, resolve_theme, ConfigStore, EnvOverrides, WispConfig};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let xtask = Xtask::parse();
    init_tracing(xtask.verbose);
    if let Err(err) = xtask.run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Inspect Wisp themes and component styles", version)]
struct Xtask {
    /// Log debug output to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    /// Extra config file layered over the user config.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Debug, Subcommand)]
enum XtaskCommand {
    /// Print the resolved theme as JSON.
    Theme {
        #[command(flatten)]
        source: ThemeArgs,
    },
    /// Print the theme as a stylesheet of CSS custom properties.
    CssVars {
        #[command(flatten)]
        source: ThemeArgs,
        /// Selector the declarations are scoped to.
        #[arg(long, default_value = ":root")]
        selector: String,
    },
    /// Check WCAG contrast of text/background token pairs.
    Contrast {
        #[command(flatten)]
        source: ThemeArgs,
        /// Ratio every pair must reach.
        #[arg(long, default_value_t = 4.5)]
        min_ratio: f64,
    },
    /// Print the resolved colors and styles of a component.
    Styles {
        #[arg(value_enum)]
        component: ComponentKind,
        #[command(flatten)]
        state: StateArgs,
        #[arg(long, value_enum, default_value_t = SizeArg::Md)]
        size: SizeArg,
        /// Button/tag variant, chat sender or checkbox value.
        #[arg(long)]
        variant: Option<String>,
        #[command(flatten)]
        source: ThemeArgs,
    },
}

#[derive(Debug, Args)]
struct ThemeArgs {
    /// Theme mode; beats the config file and `WISP_THEME_MODE`.
    #[arg(long)]
    mode: Option<ThemeMode>,
    /// JSON file of theme overrides merged over the configured ones.
    #[arg(long)]
    overrides: Option<PathBuf>,
    /// Ignore the user config file.
    #[arg(long)]
    no_config: bool,
}

#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
struct StateArgs {
    #[arg(long)]
    disabled: bool,
    #[arg(long)]
    error: bool,
    #[arg(long)]
    warning: bool,
    #[arg(long)]
    focused: bool,
    /// Selected, checked, open, on or filled depending on the component.
    #[arg(long)]
    selected: bool,
    #[arg(long)]
    hovered: bool,
    #[arg(long)]
    pressed: bool,
}

impl StateArgs {
    fn to_state(&self) -> InteractionState {
        InteractionState::new()
            .disabled(self.disabled)
            .error(self.error)
            .warning(self.warning)
            .focused(self.focused)
            .selected(self.selected)
            .hovered(self.hovered)
            .pressed(self.pressed)
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ComponentKind {
    Button,
    ChatBubble,
    Checkbox,
    Combobox,
    Input,
    PinInput,
    Switch,
    Tag,
    TimePicker,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SizeArg {
    Sm,
    Md,
    Lg,
}

impl From<SizeArg> for ComponentSize {
    fn from(size: SizeArg) -> Self {
        match size {
            SizeArg::Sm => ComponentSize::Sm,
            SizeArg::Md => ComponentSize::Md,
            SizeArg::Lg => ComponentSize::Lg,
        }
    }
}

impl Xtask {
    fn run(self) -> Result<(), Box<dyn Error>> {
        match &self.command {
            XtaskCommand::Theme { source } => {
                let theme = self.load_theme(source)?;
                println!("{}", serde_json::to_string_pretty(&theme)?);
                Ok(())
            }
            XtaskCommand::CssVars { source, selector } => {
                let theme = self.load_theme(source)?;
                print!("{}", css_vars_stylesheet(&theme, selector));
                Ok(())
            }
            XtaskCommand::Contrast { source, min_ratio } => {
                let theme = self.load_theme(source)?;
                check_contrast(&theme, *min_ratio)
            }
            XtaskCommand::Styles {
                component,
                state,
                size,
                variant,
                source,
            } => {
                let theme = self.load_theme(source)?;
                let output = render_component(
                    *component,
                    state.to_state(),
                    (*size).into(),
                    variant.as_deref(),
                    &theme,
                )?;
                println!("{}", serde_json::to_string_pretty(&output)?);
                Ok(())
            }
        }
    }

    /// Layers, lowest first: user config, `--config`, environment,
    /// `--overrides`, `--mode`.
    fn load_theme(&self, args: &ThemeArgs) -> Result<WispTheme, Box<dyn Error>> {
        let mut layers = Vec::new();
        if !args.no_config {
            layers.push(ConfigStore::default().path().to_path_buf());
        }
        layers.extend(self.config.clone());
        let mut config = load_layered(&layers)?.with_env(&EnvOverrides::from_env());

        if let Some(path) = &args.overrides {
            let overrides: Value = serde_json::from_str(&fs::read_to_string(path)?)?;
            apply_override_file(&mut config, overrides)?;
            debug!(path = %path.display(), "applied override file");
        }
        if args.mode.is_some() {
            config.mode = args.mode;
        }
        Ok(resolve_theme(&config)?)
    }
}

/// Layers an `--overrides` document onto `config`. Its `mode` is lifted to
/// the top level so it outranks the config files and the environment.
fn apply_override_file(
    config: &mut WispConfig,
    mut overrides: Value,
) -> Result<(), Box<dyn Error>> {
    let mode = overrides
        .as_object_mut()
        .and_then(|map| map.remove("mode"))
        .filter(|mode| !mode.is_null());
    if let Some(mode) = mode {
        config.mode = Some(serde_json::from_value(mode)?);
    }
    deep_merge_json(&mut config.overrides, &overrides);
    Ok(())
}

fn check_contrast(theme: &WispTheme, min_ratio: f64) -> Result<(), Box<dyn Error>> {
    let c = &theme.colors;
    let pairs: [(&str, &str, &str); 5] = [
        (
            "text.primary / background.canvas",
            c.text.primary.as_str(),
            c.background.canvas.as_str(),
        ),
        (
            "text.primary / background.surface",
            c.text.primary.as_str(),
            c.background.surface.as_str(),
        ),
        (
            "text.secondary / background.canvas",
            c.text.secondary.as_str(),
            c.background.canvas.as_str(),
        ),
        (
            "text.onRaised / background.raised",
            c.text.on_raised.as_str(),
            c.background.raised.as_str(),
        ),
        (
            "brand.text / brand.primary",
            c.brand.text.as_str(),
            c.brand.primary.as_str(),
        ),
    ];

    let mut failures = 0usize;
    for (label, foreground, background) in pairs {
        match contrast_ratio(foreground, background) {
            Ok(ratio) => {
                let verdict = if ratio >= min_ratio { "ok" } else { "FAIL" };
                if ratio < min_ratio {
                    failures += 1;
                }
                println!("{label:<38} {ratio:>6.2}  {verdict}");
            }
            Err(err) => {
                warn!(pair = label, %err, "cannot measure contrast");
                println!("{label:<38} {:>6}  skipped", "n/a");
            }
        }
    }

    if failures == 0 {
        Ok(())
    } else {
        Err(format!("{failures} pair(s) below {min_ratio:.1}:1").into())
    }
}

fn parse_variant<T: DeserializeOwned + Default>(name: Option<&str>) -> Result<T, Box<dyn Error>> {
    match name {
        Some(name) => serde_json::from_value(Value::String(name.to_ascii_lowercase()))
            .map_err(|_| format!("unknown variant '{name}'").into()),
        None => Ok(T::default()),
    }
}

fn render_component(
    kind: ComponentKind,
    state: InteractionState,
    size: ComponentSize,
    variant: Option<&str>,
    theme: &WispTheme,
) -> Result<Value, Box<dyn Error>> {
    let output = match kind {
        ComponentKind::Button => {
            let variant = parse_variant(variant)?;
            let colors = button::resolve_button_colors(variant, state, theme);
            json!({
                "colors": colors,
                "styles": {
                    "root": button::build_button_style(&colors, size, state, false, theme),
                },
            })
        }
        ComponentKind::ChatBubble => {
            let sender = parse_variant(variant)?;
            let colors = chat_bubble::resolve_chat_bubble_colors(sender, theme);
            json!({
                "colors": colors,
                "styles": {
                    "root": chat_bubble::build_chat_bubble_style(&colors, sender, true, theme),
                    "meta": chat_bubble::build_chat_bubble_meta_style(&colors, theme),
                },
            })
        }
        ComponentKind::Checkbox => {
            let check = match variant {
                Some(_) => parse_variant(variant)?,
                None if state.selected => checkbox::CheckState::Checked,
                None => checkbox::CheckState::Unchecked,
            };
            let colors = checkbox::resolve_checkbox_colors(check, state, theme);
            json!({
                "colors": colors,
                "glyph": check.glyph(),
                "styles": {
                    "box": checkbox::build_checkbox_style(&colors, size, state, theme),
                    "label": checkbox::build_checkbox_label_style(&colors, size, theme),
                },
            })
        }
        ComponentKind::Combobox => {
            let colors = combobox::resolve_combobox_colors(state, theme);
            let option = |highlighted, selected| {
                combobox::build_combobox_option_style(&colors, highlighted, selected, size, theme)
            };
            json!({
                "colors": colors,
                "styles": {
                    "trigger": combobox::build_combobox_trigger_style(&colors, size, state, theme),
                    "menu": combobox::build_combobox_menu_style(&colors, theme),
                    "option": option(false, false),
                    "optionHighlighted": option(true, false),
                    "optionSelected": option(false, true),
                },
            })
        }
        ComponentKind::Input => {
            let colors = input::resolve_input_colors(state, theme);
            json!({
                "colors": colors,
                "styles": {
                    "root": input::build_input_style(&colors, size, state, theme),
                    "label": input::build_input_label_style(&colors, size, theme),
                    "hint": input::build_input_hint_style(&colors, theme),
                },
            })
        }
        ComponentKind::PinInput => {
            let colors = pin_input::resolve_pin_input_colors(state, state.selected, theme);
            json!({
                "colors": colors,
                "styles": {
                    "row": pin_input::build_pin_input_row_style(size, theme),
                    "cell": pin_input::build_pin_input_cell_style(&colors, size, theme),
                },
            })
        }
        ComponentKind::Switch => {
            let colors = switch::resolve_switch_colors(state, theme);
            json!({
                "colors": colors,
                "styles": {
                    "track": switch::build_switch_track_style(&colors, size, state, theme),
                    "thumb": switch::build_switch_thumb_style(&colors, size, state, theme),
                },
            })
        }
        ComponentKind::Tag => {
            let variant = parse_variant(variant)?;
            let colors = tag::resolve_tag_colors(variant, state, theme);
            json!({
                "colors": colors,
                "styles": {
                    "root": tag::build_tag_style(&colors, size, state, theme),
                    "remove": tag::build_tag_remove_style(&colors, state.hovered, theme),
                },
            })
        }
        ComponentKind::TimePicker => {
            let colors = time_picker::resolve_time_picker_colors(state, theme);
            json!({
                "colors": colors,
                "styles": {
                    "field": time_picker::build_time_picker_style(&colors, size, state, theme),
                    "segment": time_picker::build_time_segment_style(&colors, state.focused, theme),
                    "panel": time_picker::build_time_picker_panel_style(&colors, theme),
                    "option": time_picker::build_time_option_style(&colors, false, theme),
                    "optionSelected": time_picker::build_time_option_style(&colors, true, theme),
                },
            })
        }
    };
    Ok(output)
}
