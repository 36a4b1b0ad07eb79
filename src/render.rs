//! Section and card renderers.
//! Pure string work: content tree in, HTML fragments out; page.rs routes
//! the fragments. Content is author-supplied, so values pass through verbatim.

use serde_json::Value;

use crate::error::RenderError;
use crate::icons::IconSet;
use crate::templates;

/// A rendered piece of the page, tagged with where it belongs.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Nav(String),
    Hero(String),
    Section { key: String, html: String },
}

/// Render the full fragment sequence for a content tree: navigation,
/// hero, then each enabled section in navigation order. Sections that
/// fail to make sense are skipped; one bad section never takes down
/// the rest of the page.
pub fn render(tree: &Value, icons: &IconSet) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    fragments.push(Fragment::Nav(render_navigation(tree)));
    fragments.push(Fragment::Hero(render_hero(tree)));

    for key in navigation_order(tree) {
        let section = match tree.get("sections").and_then(|s| s.get(&key)) {
            Some(section) => section,
            None => continue,
        };
        if !section.is_object() {
            log::warn!("{}", RenderError::MalformedSection(key.clone()));
            continue;
        }
        if section.get("enabled").and_then(|v| v.as_bool()) == Some(false) {
            continue;
        }

        let html = match key.as_str() {
            "social" => render_social_section(section, icons),
            "skills" => render_skills_section(section),
            "testimonials" => render_testimonials_section(section),
            _ => render_section(&key, section),
        };
        if html.is_empty() {
            continue;
        }
        fragments.push(Fragment::Section { key, html });
    }

    fragments
}

fn navigation_order(tree: &Value) -> Vec<String> {
    tree.get("navigation")
        .and_then(|n| n.get("order"))
        .and_then(|o| o.as_array())
        .map(|order| {
            order
                .iter()
                .filter_map(|v| v.as_str())
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// One nav entry per enabled section in navigation order. Keys with
/// no matching section are skipped silently.
pub fn render_navigation(tree: &Value) -> String {
    let mut html = String::new();
    for key in navigation_order(tree) {
        let section = match tree.get("sections").and_then(|s| s.get(&key)) {
            Some(section) if section.is_object() => section,
            _ => continue,
        };
        if section.get("enabled").and_then(|v| v.as_bool()) == Some(false) {
            continue;
        }
        html.push_str(&templates::fill(
            templates::NAV_ITEM,
            &[
                ("sectionId", key.as_str()),
                ("icon", text_or(section, "icon", "📄")),
                ("title", text(section, "title")),
            ],
        ));
    }
    html
}

pub fn render_hero(tree: &Value) -> String {
    let personal = tree.get("personal").cloned().unwrap_or_default();
    let email = text(&personal, "email");
    let email_html = if email.is_empty() {
        String::new()
    } else {
        format!(r#"<span>✉️ <a href="mailto:{}">{}</a></span>"#, email, email)
    };

    templates::fill(
        templates::HERO,
        &[
            ("name", text(&personal, "name")),
            ("title", text(&personal, "title")),
            ("bio", text(&personal, "bio")),
            ("location", text(&personal, "location")),
            ("email", email_html.as_str()),
        ],
    )
}

/// A standard section: header plus a grid of items rendered by the
/// section key's item renderer.
pub fn render_section(key: &str, section: &Value) -> String {
    let mut grid = String::new();
    if let Some(items) = section.get("items").and_then(|v| v.as_array()) {
        for item in items {
            grid.push_str(&render_item(key, item));
        }
    }

    templates::fill(
        templates::SECTION,
        &[
            ("sectionId", key),
            ("icon", text_or(section, "icon", "📄")),
            ("title", text(section, "title")),
            ("items", grid.as_str()),
        ],
    )
}

/// Render one item using the renderer for its section key. Unknown
/// keys get the generic card.
pub fn render_item(section_key: &str, item: &Value) -> String {
    match section_key {
        "gamesTested" => render_game_tested(item),
        "gamesMade" => render_game_made(item),
        "art" => render_art_item(item),
        "codingProjects" => render_coding_project(item),
        "workExperience" => render_work_item(item),
        "clients" => render_client_item(item),
        "projects" => render_project_item(item),
        "education" => render_education_item(item),
        "awards" => render_award_item(item),
        "certifications" => render_certification_item(item),
        "blog" => render_blog_item(item),
        "openSource" => render_open_source_item(item),
        "speaking" => render_speaking_item(item),
        "testimonials" => render_testimonial_item(item),
        _ => render_generic_item(item),
    }
}

// ── Field helpers ──

fn text<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(|v| v.as_str()).unwrap_or("")
}

fn text_or<'a>(value: &'a Value, key: &str, default: &'a str) -> &'a str {
    value
        .get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
}

/// String array field rendered as a run of tag spans.
fn tag_list(item: &Value, field: &str) -> String {
    let mut html = String::new();
    if let Some(tags) = item.get(field).and_then(|v| v.as_array()) {
        for tag in tags {
            if let Some(tag) = tag.as_str() {
                html.push_str(&templates::fill(templates::ITEM_TAG, &[("tag", tag)]));
            }
        }
    }
    html
}

/// String array field rendered as a bulleted list, or nothing when
/// the field is absent or empty.
fn bullet_list(item: &Value, field: &str) -> String {
    let entries = match item.get(field).and_then(|v| v.as_array()) {
        Some(entries) if !entries.is_empty() => entries,
        _ => return String::new(),
    };

    let mut items = String::new();
    for entry in entries {
        if let Some(entry) = entry.as_str() {
            items.push_str(&templates::fill(templates::LIST_ITEM, &[("item", entry)]));
        }
    }
    templates::fill(templates::LIST_UL, &[("items", items.as_str())])
}

/// Image tag when the item has one; nothing at all otherwise.
fn item_image(item: &Value) -> String {
    let src = text(item, "image");
    if src.is_empty() {
        return String::new();
    }
    templates::fill(
        templates::ITEM_IMAGE,
        &[("src", src), ("alt", text(item, "title"))],
    )
}

/// Footer with one link per non-empty (url, icon, text) triple, or
/// nothing when no link applies.
fn link_footer(links: &[(&str, &str, &str)]) -> String {
    let mut content = String::new();
    for &(url, icon, text) in links {
        if url.is_empty() {
            continue;
        }
        content.push_str(&templates::fill(
            templates::ITEM_LINK,
            &[("url", url), ("icon", icon), ("text", text)],
        ));
    }
    if content.is_empty() {
        return String::new();
    }
    templates::fill(templates::ITEM_FOOTER, &[("content", content.as_str())])
}

/// Count field formatted for a stats line; numbers and non-empty
/// strings both count, zero and absent do not.
fn count_text(item: &Value, key: &str) -> Option<String> {
    match item.get(key) {
        Some(Value::Number(n)) => {
            if n.as_i64() == Some(0) {
                None
            } else {
                Some(n.to_string())
            }
        }
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

// ── Item renderers ──

fn render_game_tested(item: &Value) -> String {
    let image = item_image(item);
    let platforms = tag_list(item, "platforms");

    templates::fill(
        templates::GAME_TESTED,
        &[
            ("image", image.as_str()),
            ("title", text(item, "title")),
            ("phase", text_or(item, "phase", "Testing")),
            ("role", text(item, "role")),
            ("company", text(item, "company")),
            ("period", text(item, "period")),
            ("description", text(item, "description")),
            ("platforms", platforms.as_str()),
        ],
    )
}

fn render_game_made(item: &Value) -> String {
    let image = item_image(item);
    let technologies = tag_list(item, "technologies");
    let footer = link_footer(&[
        (text(item, "link"), "🎮", "Play Game"),
        (text(item, "repository"), "💻", "View Code"),
    ]);

    templates::fill(
        templates::GAME_MADE,
        &[
            ("image", image.as_str()),
            ("title", text(item, "title")),
            ("role", text_or(item, "role", "Developer")),
            ("period", text(item, "period")),
            ("description", text(item, "description")),
            ("technologies", technologies.as_str()),
            ("footer", footer.as_str()),
        ],
    )
}

fn render_art_item(item: &Value) -> String {
    let image = item_image(item);
    let software = tag_list(item, "software");

    templates::fill(
        templates::ART_ITEM,
        &[
            ("image", image.as_str()),
            ("title", text(item, "title")),
            ("type", text_or(item, "type", "Art")),
            ("date", text(item, "date")),
            ("description", text(item, "description")),
            ("software", software.as_str()),
        ],
    )
}

fn render_coding_project(item: &Value) -> String {
    let image = item_image(item);
    let features = bullet_list(item, "features");
    let technologies = tag_list(item, "technologies");
    let footer = link_footer(&[
        (text(item, "link"), "🔗", "View Project"),
        (text(item, "repository"), "💻", "View Code"),
    ]);

    templates::fill(
        templates::CODING_PROJECT,
        &[
            ("image", image.as_str()),
            ("title", text(item, "title")),
            ("description", text(item, "description")),
            ("features", features.as_str()),
            ("technologies", technologies.as_str()),
            ("footer", footer.as_str()),
        ],
    )
}

fn render_work_item(item: &Value) -> String {
    let current = item.get("current").and_then(|v| v.as_bool()).unwrap_or(false);
    let current_badge = if current { templates::CURRENT_BADGE } else { "" };
    let responsibilities = bullet_list(item, "responsibilities");
    let achievements = bullet_list(item, "achievements");

    let website = text(item, "website");
    let link = if website.is_empty() {
        String::new()
    } else {
        templates::fill(
            templates::ITEM_LINK,
            &[("url", website), ("icon", "🔗"), ("text", "Visit Website")],
        )
    };

    templates::fill(
        templates::WORK_ITEM,
        &[
            ("position", text(item, "position")),
            ("currentBadge", current_badge),
            ("company", text(item, "company")),
            ("location", text(item, "location")),
            ("period", text(item, "period")),
            ("responsibilities", responsibilities.as_str()),
            ("achievements", achievements.as_str()),
            ("link", link.as_str()),
        ],
    )
}

fn render_client_item(item: &Value) -> String {
    let technologies = tag_list(item, "technologies");
    let quote = text(item, "testimonial");
    let testimonial = if quote.is_empty() {
        String::new()
    } else {
        format!(r#"<blockquote class="testimonial">"{}"</blockquote>"#, quote)
    };

    templates::fill(
        templates::CLIENT_ITEM,
        &[
            ("name", text(item, "name")),
            ("role", text(item, "role")),
            ("period", text(item, "period")),
            ("project", text(item, "project")),
            ("technologies", technologies.as_str()),
            ("testimonial", testimonial.as_str()),
        ],
    )
}

fn render_project_item(item: &Value) -> String {
    let image = item_image(item);
    let technologies = tag_list(item, "technologies");
    let highlights = bullet_list(item, "highlights");
    let footer = link_footer(&[
        (text(item, "link"), "🔗", "View Project"),
        (text(item, "repository"), "💻", "View Code"),
    ]);

    let meta_content = format!(
        r#"<span>{role}</span><span>{period}</span><span class="item-badge">{category}</span>"#,
        role = text(item, "role"),
        period = text(item, "period"),
        category = text(item, "category"),
    );
    let meta = templates::fill(templates::ITEM_META, &[("content", meta_content.as_str())]);
    let tags = templates::fill(templates::ITEM_TAGS, &[("tags", technologies.as_str())]);

    let description = format!("{}{}", text(item, "description"), highlights);

    templates::fill(
        templates::PORTFOLIO_ITEM,
        &[
            ("image", image.as_str()),
            ("title", text(item, "title")),
            ("meta", meta.as_str()),
            ("description", description.as_str()),
            ("tags", tags.as_str()),
            ("footer", footer.as_str()),
        ],
    )
}

fn render_education_item(item: &Value) -> String {
    let grade_value = text(item, "grade");
    let grade = if grade_value.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="item-meta"><strong>Grade:</strong> {}</div>"#,
            grade_value
        )
    };
    let achievements = bullet_list(item, "achievements");

    templates::fill(
        templates::EDUCATION_ITEM,
        &[
            ("institution", text(item, "institution")),
            ("degree", text(item, "degree")),
            ("field", text(item, "field")),
            ("location", text(item, "location")),
            ("graduationDate", text(item, "graduationDate")),
            ("grade", grade.as_str()),
            ("achievements", achievements.as_str()),
        ],
    )
}

fn render_award_item(item: &Value) -> String {
    templates::fill(
        templates::AWARD_ITEM,
        &[
            ("title", text(item, "title")),
            ("category", text_or(item, "category", "Award")),
            ("issuer", text(item, "issuer")),
            ("date", text(item, "date")),
            ("description", text(item, "description")),
        ],
    )
}

fn render_certification_item(item: &Value) -> String {
    let link = link_footer(&[(text(item, "link"), "🔗", "View Certificate")]);

    templates::fill(
        templates::CERTIFICATION_ITEM,
        &[
            ("title", text(item, "title")),
            ("issuer", text(item, "issuer")),
            ("date", text(item, "date")),
            ("link", link.as_str()),
        ],
    )
}

fn render_blog_item(item: &Value) -> String {
    let tags_inner = tag_list(item, "tags");
    let tags = templates::fill(templates::ITEM_TAGS, &[("tags", tags_inner.as_str())]);
    let footer = link_footer(&[(text(item, "link"), "📖", "Read Article")]);

    let meta_content = format!(
        "<span>{category}</span><span>{date}</span>",
        category = text_or(item, "category", "Article"),
        date = text(item, "date"),
    );
    let meta = templates::fill(templates::ITEM_META, &[("content", meta_content.as_str())]);

    templates::fill(
        templates::PORTFOLIO_ITEM,
        &[
            ("image", ""),
            ("title", text(item, "title")),
            ("meta", meta.as_str()),
            ("description", text_or(item, "excerpt", text(item, "description"))),
            ("tags", tags.as_str()),
            ("footer", footer.as_str()),
        ],
    )
}

fn render_open_source_item(item: &Value) -> String {
    let technologies = tag_list(item, "technologies");
    let tags = templates::fill(templates::ITEM_TAGS, &[("tags", technologies.as_str())]);
    let footer = link_footer(&[(text(item, "repository"), "💻", "View on GitHub")]);

    let mut stats: Vec<String> = Vec::new();
    if let Some(prs) = count_text(item, "prs") {
        stats.push(format!("{} PRs", prs));
    }
    if let Some(stars) = count_text(item, "stars") {
        stats.push(format!("⭐ {}", stars));
    }

    let meta_content = format!(
        "<span>{role}</span><span>{stats}</span>",
        role = text_or(item, "role", "Contributor"),
        stats = stats.join(" • "),
    );
    let meta = templates::fill(templates::ITEM_META, &[("content", meta_content.as_str())]);

    templates::fill(
        templates::PORTFOLIO_ITEM,
        &[
            ("image", ""),
            ("title", text(item, "project")),
            ("meta", meta.as_str()),
            ("description", text(item, "description")),
            ("tags", tags.as_str()),
            ("footer", footer.as_str()),
        ],
    )
}

fn render_speaking_item(item: &Value) -> String {
    let footer = link_footer(&[
        (text(item, "slides"), "📊", "Slides"),
        (text(item, "recording"), "▶️", "Recording"),
    ]);

    let meta_content = format!(
        r#"<span>{event}</span><span>{date}</span><span class="item-badge">{kind}</span>"#,
        event = text(item, "event"),
        date = text(item, "date"),
        kind = text_or(item, "type", "Talk"),
    );
    let meta = templates::fill(templates::ITEM_META, &[("content", meta_content.as_str())]);

    templates::fill(
        templates::PORTFOLIO_ITEM,
        &[
            ("image", ""),
            ("title", text(item, "title")),
            ("meta", meta.as_str()),
            ("description", text(item, "description")),
            ("tags", ""),
            ("footer", footer.as_str()),
        ],
    )
}

fn render_testimonial_item(item: &Value) -> String {
    let name = text(item, "name");
    let src = text(item, "image");
    let image = if src.is_empty() {
        String::new()
    } else {
        format!(
            r#"<img src="{}" alt="{}" class="testimonial-image" />"#,
            src, name
        )
    };
    let company_value = text(item, "company");
    let company = if company_value.is_empty() {
        String::new()
    } else {
        format!("<span>{}</span>", company_value)
    };

    format!(
        r#"<div class="portfolio-item testimonial-item">
    {image}
    <blockquote class="testimonial-quote">"{quote}"</blockquote>
    <div class="testimonial-author">
        <strong>{name}</strong>
        <span>{position}</span>
        {company}
    </div>
</div>"#,
        image = image,
        quote = text(item, "quote"),
        name = name,
        position = text(item, "position"),
        company = company,
    )
}

fn render_generic_item(item: &Value) -> String {
    templates::fill(
        templates::PORTFOLIO_ITEM,
        &[
            ("image", ""),
            ("title", text_or(item, "title", text(item, "name"))),
            ("meta", ""),
            ("description", text(item, "description")),
            ("tags", ""),
            ("footer", ""),
        ],
    )
}

// ── Whole-section renderers ──

/// Skill categories with percentage progress bars. Levels default to
/// 50 when absent.
pub fn render_skills_section(section: &Value) -> String {
    let mut grid = String::new();
    if let Some(categories) = section.get("categories").and_then(|v| v.as_array()) {
        for category in categories {
            let mut skills = String::new();
            if let Some(list) = category.get("skills").and_then(|v| v.as_array()) {
                for skill in list {
                    let level = match skill.get("level") {
                        Some(Value::Number(n)) => n.to_string(),
                        Some(Value::String(s)) if !s.is_empty() => s.clone(),
                        _ => "50".to_string(),
                    };
                    skills.push_str(&templates::fill(
                        templates::SKILL_ITEM,
                        &[("name", text(skill, "name")), ("level", level.as_str())],
                    ));
                }
            }
            grid.push_str(&templates::fill(
                templates::SKILLS_CATEGORY,
                &[
                    ("category", text(category, "category")),
                    ("skills", skills.as_str()),
                ],
            ));
        }
    }

    templates::fill(
        templates::SECTION,
        &[
            ("sectionId", "skills"),
            ("icon", text_or(section, "icon", "⚡")),
            ("title", text(section, "title")),
            ("items", grid.as_str()),
        ],
    )
}

/// Social link cards. Icons come from the icon set, falling back to a
/// first-letter glyph. A social section without items renders nothing
/// at all.
pub fn render_social_section(section: &Value, icons: &IconSet) -> String {
    let items = match section.get("items").and_then(|v| v.as_array()) {
        Some(items) if !items.is_empty() => items,
        _ => return String::new(),
    };

    let mut grid = String::new();
    for item in items {
        let platform = text(item, "platform");
        let icon = icons.social_icon_html(platform);
        grid.push_str(&templates::fill(
            templates::SOCIAL_ITEM,
            &[
                ("url", text_or(item, "url", "#")),
                ("icon", icon.as_str()),
                ("platform", platform),
                ("username", text(item, "username")),
            ],
        ));
    }

    templates::fill(
        templates::SOCIAL_SECTION,
        &[
            ("icon", text_or(section, "icon", "🔗")),
            ("title", text(section, "title")),
            ("items", grid.as_str()),
        ],
    )
}

pub fn render_testimonials_section(section: &Value) -> String {
    let mut grid = String::new();
    if let Some(items) = section.get("items").and_then(|v| v.as_array()) {
        for item in items {
            grid.push_str(&render_testimonial_item(item));
        }
    }

    templates::fill(
        templates::SECTION,
        &[
            ("sectionId", "testimonials"),
            ("icon", text_or(section, "icon", "💬")),
            ("title", text(section, "title")),
            ("items", grid.as_str()),
        ],
    )
}
