use contracts::domain::a003_supplier_report::{ContentBlock, Inline, LabeledPair, Section, Subsection};
use leptos::prelude::*;

fn render_inline(inline: Inline) -> AnyView {
    match inline {
        Inline::Text(text) => text.into_any(),
        Inline::Strong(text) => view! { <strong>{text}</strong> }.into_any(),
        Inline::LineBreak => view! { <br /> }.into_any(),
    }
}

fn render_pair(pair: LabeledPair) -> impl IntoView {
    view! {
        <p>
            <strong>{pair.label}":"</strong>
            " "
            {pair.text}
        </p>
    }
}

pub fn render_block(block: ContentBlock) -> AnyView {
    match block {
        ContentBlock::Paragraph(inlines) => view! {
            <p>{inlines.into_iter().map(render_inline).collect_view()}</p>
        }
        .into_any(),
        ContentBlock::BulletList(items) => view! {
            <ul class="report-list">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        }
        .into_any(),
        ContentBlock::LabeledPairs(pairs) => pairs
            .into_iter()
            .map(render_pair)
            .collect_view()
            .into_any(),
    }
}

fn render_subsection(subsection: Subsection) -> impl IntoView {
    view! {
        <div class="report-subsection">
            <h3 class="report-subsection__title">{subsection.subtitle}</h3>
            <div class="report-subsection__body">
                {subsection.content.into_iter().map(render_block).collect_view()}
            </div>
        </div>
    }
}

pub fn render_section(section: Section) -> impl IntoView {
    let Section {
        id,
        title,
        subsections,
    } = section;

    view! {
        <section class="report-section">
            <h2 id=id class="report-section__title">{title}</h2>
            <div class="report-section__body">
                {subsections.into_iter().map(render_subsection).collect_view()}
            </div>
        </section>
    }
}

/// Anchor links to every section, in document order
pub fn render_contents(sections: &[Section]) -> impl IntoView {
    let links = sections
        .iter()
        .map(|section| (section.anchor_href(), section.title.clone()))
        .collect::<Vec<_>>();

    view! {
        <nav class="report-contents">
            <ol>
                {links
                    .into_iter()
                    .map(|(href, title)| view! { <li><a href=href>{title}</a></li> })
                    .collect_view()}
            </ol>
        </nav>
    }
}
