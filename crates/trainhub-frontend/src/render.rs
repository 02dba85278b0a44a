//! Plain-text rendering of portal content.

use trainhub_content::model::{ContentBundle, Lang, LocaleText, TrainingProcess};

/// The home page: site chrome plus the process catalog.
pub fn home(bundle: &ContentBundle, lang: Lang) {
    let site = &bundle.site_config;
    println!();
    println!("==  {}  ==", site.title.get(lang));
    println!("{}", site.subtitle.get(lang));
    println!();
    for (position, process) in bundle.training_data.iter().enumerate() {
        println!(
            "{}. [{}] {} ({} video)",
            position + 1,
            process.icon,
            process.title.get(lang),
            process.videos.len()
        );
        println!("   {}", process.description.get(lang));
    }
    println!();
    println!("© {}. All rights reserved.", site.site_name.get(lang));
}

/// One process's playlist, with playable embed URLs.
pub fn process(process: &TrainingProcess, lang: Lang) {
    println!();
    println!("==  {}  ==", process.title.get(lang));
    println!("{}", process.description.get(lang));
    println!();
    if process.videos.is_empty() {
        println!("(no videos yet)");
    }
    for (position, video) in process.videos.iter().enumerate() {
        println!("{}. {}", position + 1, video.title.get(lang));
        println!("   {}", video.embed_url(lang));
    }
    println!();
}

/// The draft's editable rows. Append `.vi` or `.th` for `set`; pass a row
/// as-is to `translate`.
pub fn draft_overview(bundle: &ContentBundle) {
    println!();
    println!("Editable draft paths (vi | th):");
    locale_row("siteConfig.title", &bundle.site_config.title);
    locale_row("siteConfig.subtitle", &bundle.site_config.subtitle);
    locale_row("siteConfig.siteName", &bundle.site_config.site_name);
    for (process_index, process) in bundle.training_data.iter().enumerate() {
        let base = format!("trainingData.{process_index}");
        locale_row(&format!("{base}.title"), &process.title);
        locale_row(&format!("{base}.description"), &process.description);
        for (video_index, video) in process.videos.iter().enumerate() {
            locale_row(&format!("{base}.videos.{video_index}.title"), &video.title);
        }
    }
    println!();
}

fn locale_row(path: &str, text: &LocaleText) {
    println!("  {path:<40} {} | {}", text.vi, text.th);
}
