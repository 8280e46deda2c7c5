//! Subcommand implementations.

use std::time::Instant;

use anyhow::{Context, bail};
use chrono::Utc;
use komi_core::catalog::{ChapterNeighbors, ComicOrder, DataService, PageRequest};
use komi_core::prefs::{Interaction, LastRead, LastReadStore, ProfileStore, ReadCounter};
use komi_core::recommend::{MatchReason, Recommender, Tab};
use komi_core::storage::RedbStorage;
use komi_core::types::Slug;
use komi_search::{NavKey, Panel, SearchConfig, SearchEffect, SearchEngine};

use crate::AppContext;

fn engine(ctx: &AppContext) -> anyhow::Result<SearchEngine<RedbStorage>> {
    let config = SearchConfig::from(&ctx.config);
    SearchEngine::new(config, ctx.storage.clone()).context("failed to read search history")
}

pub(crate) fn search(
    ctx: &AppContext,
    query: &str,
    down: usize,
    confirm: bool,
) -> anyhow::Result<()> {
    let mut engine = engine(ctx)?;
    engine.open_with(&ctx.catalog);

    let now = Instant::now();
    engine.set_query(query, now);
    engine.tick(now + engine.config().debounce);
    for _ in 0..down {
        engine.handle_key(NavKey::Down);
    }

    let Some(session) = engine.session() else {
        bail!("search session closed unexpectedly");
    };
    match session.panel() {
        Panel::Suggestions => {
            println!("Recent searches:");
            for term in engine.history() {
                println!("  {term}");
            }
        }
        Panel::Searching => println!("Searching..."),
        Panel::NoResults => println!("No results for \"{}\"", query.trim()),
        Panel::Results => {
            let selected = session.selected_index();
            for (i, m) in session.results().iter().enumerate() {
                let marker = if selected == Some(i) { '>' } else { ' ' };
                let author = m.record.author.as_deref().unwrap_or("-");
                println!(
                    "{marker} {:.2}  {}  ({author})  /comic/{}",
                    m.score, m.record.title, m.record.slug
                );
            }
        }
    }

    if !confirm {
        return Ok(());
    }
    match engine.handle_key(NavKey::Enter) {
        SearchEffect::Navigate(record) => println!("-> /comic/{}", record.slug),
        SearchEffect::ShowAll(query) => {
            println!("-> /search?q={query}");
            for comic in ctx.catalog.search_titles(&query, 20)? {
                println!("  {}  /comic/{}", comic.title, comic.slug);
            }
        }
        SearchEffect::None | SearchEffect::Close => {}
    }
    Ok(())
}

pub(crate) fn history_list(ctx: &AppContext) -> anyhow::Result<()> {
    let engine = engine(ctx)?;
    if engine.history().is_empty() {
        println!("No recent searches");
    }
    for term in engine.history() {
        println!("{term}");
    }
    Ok(())
}

pub(crate) fn history_remove(ctx: &AppContext, term: &str) -> anyhow::Result<()> {
    let mut engine = engine(ctx)?;
    if !engine.remove_history(term)? {
        println!("\"{term}\" was not in the history");
    }
    Ok(())
}

pub(crate) fn history_clear(ctx: &AppContext) -> anyhow::Result<()> {
    engine(ctx)?.clear_history()?;
    Ok(())
}

pub(crate) fn read(ctx: &AppContext, comic: &str, chapter: &str) -> anyhow::Result<()> {
    let comic_slug = Slug::try_new(comic).context("invalid comic slug")?;
    let chapter_slug = Slug::try_new(chapter).context("invalid chapter slug")?;

    let Some(comic) = ctx.catalog.comic_by_slug(&comic_slug)? else {
        bail!("comic not found: {comic_slug}");
    };
    let Some(chapter) = ctx.catalog.chapter(&comic_slug, &chapter_slug)? else {
        bail!("chapter not found: {comic_slug}/{chapter_slug}");
    };

    let chapters = ctx.catalog.chapters(comic.id)?;
    let neighbors = ChapterNeighbors::locate(&chapters, chapter.id);

    println!("{} - {}", comic.title, chapter.title);
    println!("{} pages", chapter.images.len());
    if let Some(prev) = &neighbors.prev {
        println!("prev: /comic/{comic_slug}/{prev}");
    }
    if let Some(next) = &neighbors.next {
        println!("next: /comic/{comic_slug}/{next}");
    }

    LastReadStore::new(ctx.storage.clone()).set(&LastRead {
        title: comic.title.clone(),
        slug: comic_slug,
        chapter: chapter_slug,
    })?;

    let counter = ReadCounter::new(ctx.storage.clone(), ctx.config.reader.interstitial_interval);
    if counter.record_open()?.interstitial_due {
        println!("[interstitial]");
    }

    let mut profile = ProfileStore::load(ctx.storage.clone())?;
    profile.learn(comic.id, Interaction::View)?;
    Ok(())
}

pub(crate) fn last_read(ctx: &AppContext) -> anyhow::Result<()> {
    match LastReadStore::new(ctx.storage.clone()).get()? {
        Some(last) => println!(
            "Continue reading {}: /comic/{}/{}",
            last.title, last.slug, last.chapter
        ),
        None => println!("Nothing read yet"),
    }
    Ok(())
}

pub(crate) fn recommend(ctx: &AppContext, tab: Tab) -> anyhow::Result<()> {
    let profile = ProfileStore::load(ctx.storage.clone())?;
    let ranked = Recommender::default().rank(
        ctx.catalog.all_comics(),
        profile.profile(),
        tab,
        Utc::now(),
    );

    for rec in ranked {
        let reason = match &rec.reason {
            MatchReason::StrongMatch => "Strong match".to_string(),
            MatchReason::Trending => "Trending".to_string(),
            MatchReason::BecauseYouLike(tag) => format!("Because you like {tag}"),
            MatchReason::RecentlyUpdated => "Recently updated".to_string(),
        };
        println!("{:>2}%  {}  [{reason}]", rec.score, rec.comic.title);
    }
    Ok(())
}

pub(crate) fn browse(
    ctx: &AppContext,
    page: usize,
    per_page: usize,
    order: ComicOrder,
) -> anyhow::Result<()> {
    let comics = ctx.catalog.comics(PageRequest::page(page, per_page), order)?;
    if comics.is_empty() {
        println!("No comics on page {page}");
    }
    for comic in comics {
        let views = comic.views.unwrap_or(0);
        println!(
            "{}  {}  {views} views  /comic/{}",
            comic.updated_at.format("%Y-%m-%d"),
            comic.title,
            comic.slug
        );
    }
    Ok(())
}
