// ── Navigation and hero ──

pub const NAV_ITEM: &str =
    r##"<li><a href="#%sectionId%" data-section="%sectionId%"><span>%icon%</span> %title%</a></li>"##;

pub const HERO: &str = r#"<section class="hero">
    <h1>%name%</h1>
    <p class="lead">%title%</p>
    <p>%bio%</p>
    <div class="hero-meta">
        <span>📍 %location%</span>
        %email%
    </div>
</section>"#;

// ── Section container ──

pub const SECTION: &str = r#"<section id="%sectionId%" class="portfolio-section">
    <div class="section-header">
        <span class="section-icon">%icon%</span>
        <h2 class="section-title">%title%</h2>
    </div>
    <div class="section-grid" id="%sectionId%-grid">%items%</div>
</section>"#;

// ── Item cards ──

pub const PORTFOLIO_ITEM: &str = r#"<div class="portfolio-item">
    %image%
    <div class="item-header">
        <h3 class="item-title">%title%</h3>
    </div>
    %meta%
    <div class="item-description">%description%</div>
    %tags%
    %footer%
</div>"#;

pub const ITEM_IMAGE: &str = r#"<img src="%src%" alt="%alt%" class="item-image">"#;
pub const ITEM_META: &str = r#"<div class="item-meta">%content%</div>"#;
pub const ITEM_BADGE: &str = r#"<span class="item-badge">%text%</span>"#;
pub const ITEM_TAGS: &str = r#"<div class="item-tags">%tags%</div>"#;
pub const ITEM_TAG: &str = r#"<span class="item-tag">%tag%</span>"#;
pub const ITEM_FOOTER: &str = r#"<div class="item-footer">%content%</div>"#;
pub const ITEM_LINK: &str = r#"<a href="%url%" class="item-link" target="_blank">%icon% %text%</a>"#;

pub const GAME_TESTED: &str = r#"<div class="portfolio-item">
    %image%
    <div class="item-header">
        <h3 class="item-title">%title%</h3>
        <span class="item-badge">%phase%</span>
    </div>
    <div class="item-meta">
        <span>%role% @ %company%</span>
        <span>%period%</span>
    </div>
    <div class="item-description">%description%</div>
    <div class="item-tags">%platforms%</div>
</div>"#;

pub const GAME_MADE: &str = r#"<div class="portfolio-item">
    %image%
    <div class="item-header">
        <h3 class="item-title">%title%</h3>
    </div>
    <div class="item-meta">
        <span>%role%</span>
        <span>%period%</span>
    </div>
    <div class="item-description">%description%</div>
    <div class="item-tags">%technologies%</div>
    %footer%
</div>"#;

pub const ART_ITEM: &str = r#"<div class="portfolio-item">
    %image%
    <div class="item-header">
        <h3 class="item-title">%title%</h3>
        <span class="item-badge">%type%</span>
    </div>
    <div class="item-meta">
        <span>%date%</span>
    </div>
    <div class="item-description">%description%</div>
    <div class="item-tags">%software%</div>
</div>"#;

pub const CODING_PROJECT: &str = r#"<div class="portfolio-item">
    %image%
    <div class="item-header">
        <h3 class="item-title">%title%</h3>
    </div>
    <div class="item-description">%description%</div>
    %features%
    <div class="item-tags">%technologies%</div>
    %footer%
</div>"#;

pub const WORK_ITEM: &str = r#"<div class="portfolio-item">
    <div class="item-header">
        <h3 class="item-title">%position%</h3>
        %currentBadge%
    </div>
    <div class="item-meta">
        <span><strong>%company%</strong></span>
        <span>%location%</span>
        <span>%period%</span>
    </div>
    %responsibilities%
    %achievements%
    %link%
</div>"#;

pub const CLIENT_ITEM: &str = r#"<div class="portfolio-item">
    <div class="item-header">
        <h3 class="item-title">%name%</h3>
    </div>
    <div class="item-meta">
        <span>%role%</span>
        <span>%period%</span>
    </div>
    <div class="item-description">%project%</div>
    <div class="item-tags">%technologies%</div>
    %testimonial%
</div>"#;

pub const EDUCATION_ITEM: &str = r#"<div class="portfolio-item">
    <div class="item-header">
        <h3 class="item-title">%institution%</h3>
    </div>
    <div class="item-meta">
        <span>%degree% in %field%</span>
        <span>%location%</span>
        <span>%graduationDate%</span>
    </div>
    %grade%
    %achievements%
</div>"#;

pub const AWARD_ITEM: &str = r#"<div class="portfolio-item">
    <div class="item-header">
        <h3 class="item-title">%title%</h3>
        <span class="item-badge">%category%</span>
    </div>
    <div class="item-meta">
        <span>%issuer%</span>
        <span>%date%</span>
    </div>
    <div class="item-description">%description%</div>
</div>"#;

pub const CERTIFICATION_ITEM: &str = r#"<div class="portfolio-item">
    <div class="item-header">
        <h3 class="item-title">%title%</h3>
    </div>
    <div class="item-meta">
        <span>%issuer%</span>
        <span>%date%</span>
    </div>
    %link%
</div>"#;

// ── Skills ──

pub const SKILLS_CATEGORY: &str = r#"<div class="portfolio-item">
    <h3 class="item-title">%category%</h3>
    <div class="skills-list">%skills%</div>
</div>"#;

pub const SKILL_ITEM: &str = r#"<div class="skill-item">
    <div class="skill-name">%name%</div>
    <div class="skill-bar">
        <div class="skill-progress" style="width: %level%%"></div>
    </div>
</div>"#;

// ── Social links ──

pub const SOCIAL_SECTION: &str = r#"<section id="social" class="portfolio-section">
    <div class="section-header">
        <span class="section-icon">%icon%</span>
        <h2 class="section-title">%title%</h2>
    </div>
    <div class="social-grid">%items%</div>
</section>"#;

pub const SOCIAL_ITEM: &str = r#"<a href="%url%" class="social-link" target="_blank">
    <span class="social-icon">%icon%</span>
    <span class="social-platform">%platform%</span>
    <span class="social-username">@%username%</span>
</a>"#;

// ── Helper templates ──

pub const LIST_UL: &str = r#"<ul class="item-list">%items%</ul>"#;
pub const LIST_ITEM: &str = r#"<li>%item%</li>"#;
pub const CURRENT_BADGE: &str = r#"<span class="item-badge" style="background: linear-gradient(135deg, #00CC66 0%, #00AA55 100%); color: white;">Current</span>"#;

/// Look up a template by name.
pub fn template(name: &str) -> Option<&'static str> {
    let tmpl = match name {
        "navItem" => NAV_ITEM,
        "hero" => HERO,
        "section" => SECTION,
        "portfolioItem" => PORTFOLIO_ITEM,
        "itemImage" => ITEM_IMAGE,
        "itemMeta" => ITEM_META,
        "itemBadge" => ITEM_BADGE,
        "itemTags" => ITEM_TAGS,
        "itemTag" => ITEM_TAG,
        "itemFooter" => ITEM_FOOTER,
        "itemLink" => ITEM_LINK,
        "gameTested" => GAME_TESTED,
        "gameMade" => GAME_MADE,
        "artItem" => ART_ITEM,
        "codingProject" => CODING_PROJECT,
        "workItem" => WORK_ITEM,
        "clientItem" => CLIENT_ITEM,
        "educationItem" => EDUCATION_ITEM,
        "awardItem" => AWARD_ITEM,
        "certificationItem" => CERTIFICATION_ITEM,
        "skillsCategory" => SKILLS_CATEGORY,
        "skillItem" => SKILL_ITEM,
        "socialSection" => SOCIAL_SECTION,
        "socialItem" => SOCIAL_ITEM,
        "listUL" => LIST_UL,
        "listItem" => LIST_ITEM,
        "currentBadge" => CURRENT_BADGE,
        _ => return None,
    };
    Some(tmpl)
}

/// Fill `%key%` placeholders in a template.
///
/// Scans the template once, left to right. A valid token between two
/// `%` markers is replaced with its value from `values`, or with the
/// empty string when no pair supplies it. Values are emitted verbatim
/// and never re-scanned, so a value containing `%other%` stays
/// literal in the output. A `%` that does not open a valid token is
/// kept as-is, and scanning resumes at the next `%`.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('%') {
        let close = match rest[start + 1..].find('%') {
            Some(offset) => start + 1 + offset,
            None => break,
        };
        let key = &rest[start + 1..close];
        if !key.is_empty() && key.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            out.push_str(&rest[..start]);
            if let Some((_, value)) = values.iter().find(|(k, _)| *k == key) {
                out.push_str(value);
            }
            rest = &rest[close + 1..];
        } else {
            // Literal '%'. The second marker may still open a token,
            // so resume the scan there.
            out.push_str(&rest[..start + 1]);
            rest = &rest[start + 1..];
        }
    }

    out.push_str(rest);
    out
}
