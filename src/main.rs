use anyhow::{Context, Result};
use sitecrumb::{
    Config, Format, HostAdapter, HtmlRenderer, TextRenderer, WidgetProps, validate_options,
};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let props = WidgetProps::from_attributes(&config.attributes());
    validate_options(&props.options).context("Invalid configuration")?;

    let mut host = HostAdapter::new(props);

    if let Some(output) = &config.output {
        if !host
            .mount(output)
            .context("Failed to mount breadcrumb page")?
        {
            eprintln!("Warning: Item path or site URL missing, nothing rendered");
            return Ok(());
        }

        let page = host
            .mounted_page()
            .context("Mounted page path missing after mount")?;
        println!("Generated: {}", page.display());

        if config.open {
            open::that(page)
                .with_context(|| format!("Failed to open {}", page.display()))?;
        }
        return Ok(());
    }

    let rendered = match config.format {
        Format::Html => host.render(&HtmlRenderer).map(|markup| markup.into_string()),
        Format::Text => host.render(&TextRenderer { show_links: false }),
    };

    // Absent inputs render nothing: empty stdout, successful exit
    if let Some(rendered) = rendered {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", rendered).context("Failed to write breadcrumb")?;
    }

    Ok(())
}
