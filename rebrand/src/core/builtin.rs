//! Built-in Aquay → Ramin Habibi rule list.
//!
//! Order matters: rules are applied top to bottom, once each.

use crate::core::rule::RuleSpec;

const BRAND_TITLE: &str = "Ramin Habibi - Luxury Real Estate";

pub fn default_rules() -> Vec<RuleSpec> {
    vec![
        RuleSpec::new(
            "title",
            r"<title>Aquay - Webflow HTML Website Template</title>",
            &format!("<title>{BRAND_TITLE}</title>"),
        ),
        RuleSpec::new(
            "meta-description",
            r"Aquay is an elegant showcase for high-end property developments and real estate businesses including everything required to launch a tasteful web presence\.",
            "Ramin Habibi offers luxury real estate services and premium property consultations for discerning clients.",
        ),
        RuleSpec::new(
            "og-title",
            r#"<meta content="Aquay - Webflow HTML Website Template" property="og:title">"#,
            &format!(r#"<meta content="{BRAND_TITLE}" property="og:title">"#),
        ),
        RuleSpec::new(
            "twitter-title",
            r#"<meta content="Aquay - Webflow HTML Website Template" property="twitter:title">"#,
            &format!(r#"<meta content="{BRAND_TITLE}" property="twitter:title">"#),
        ),
        RuleSpec::new(
            "navbar-logo-dark",
            r#"<a id="w-node-_5c6ae061-b7f3-3993-0d6f-68cf6ad547cd-6ad547c9" href="(\.\./)?(index\.html)"[^>]*><img src="(\.\./)?(images/Aquay-Small-Dark\.svg)" alt=""></a>"#,
            r#"<a id="w-node-_5c6ae061-b7f3-3993-0d6f-68cf6ad547cd-6ad547c9" href="${2}" class="w-inline-block"><div class="logo-text">Ramin Habibi</div></a>"#,
        ),
        RuleSpec::new(
            "navbar-logo-white",
            r#"<a id="w-node-_1fb68cae-1399-1683-4f37-a3e2705aa34a-705aa346" href="(\.\./)?(index\.html)" class="w-inline-block"><img src="(\.\./)?(images/Aquay-Small-White\.svg)" alt=""></a>"#,
            r#"<a id="w-node-_1fb68cae-1399-1683-4f37-a3e2705aa34a-705aa346" href="${2}" class="w-inline-block"><div class="logo-text" style="color: var(--white);">Ramin Habibi</div></a>"#,
        ),
        RuleSpec::new(
            "hero-logo",
            r#"<img src="(\.\./)?(images/Aquay-Large-White\.svg)" alt="" class="hero-logo">"#,
            r#"<div class="hero-logo-text">Ramin Habibi</div>"#,
        ),
        RuleSpec::new(
            "purchase-button-dark",
            r#"<a href="https://mmra\.re/purchaseaquay" target="_blank" class="button w-inline-block">\s*<div>purchase aquay</div><img src="(\.\./)?(images/icon-arrow-right\.svg)" alt="">\s*</a>"#,
            "",
        )
        .multiline(),
        RuleSpec::new(
            "purchase-button-white",
            r#"<a href="https://mmra\.re/purchaseaquay" target="_blank" class="button white w-inline-block">\s*<div>purchase aquay</div><img src="(\.\./)?(images/icon-arrow-right-white\.svg)" alt="">\s*</a>"#,
            "",
        )
        .multiline(),
        RuleSpec::new(
            "footer-logo",
            r##"<a id="w-node-c8fec492-371b-c61c-6997-591d9743fdd1-9743fdcd" href="#" class="w-inline-block"><img src="(\.\./)?(images/Aquay-Footer-White\.svg)" alt=""></a>"##,
            r#"<div class="hero-logo-text" style="color: var(--white); font-size: 32px;">Ramin Habibi</div>"#,
        ),
        RuleSpec::new(
            "footer-copyright",
            r#"Copyright – A <a href="https://mediumrare\.shop/[^"]*" target="_blank" class="text-white">Medium Rare</a> Template"#,
            "Copyright © 2025 Ramin Habibi. All rights reserved.",
        ),
        RuleSpec::new(
            "loader-logo",
            r#"<div class="loading-container"><img src="(\.\./)?(images/loader\.svg)" loading="eager" alt="" class="loader"><img src="(\.\./)?(images/Aquay-Small-Dark\.svg)" loading="eager" alt=""></div>"#,
            r#"<div class="loading-container"><img src="${2}" loading="eager" alt="" class="loader"></div>"#,
        ),
        // Body copy only; URLs and asset names containing "Aquay" are left alone.
        RuleSpec::new(
            "greenwich-copy",
            r"Greenwich, Aquay is an immersive sanctuary",
            "Greenwich, this property is an immersive sanctuary",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rule::RuleSet;
    use crate::test_support::{
        DARK_NAVBAR_LOGO, FOOTER_COPYRIGHT, FOOTER_LOGO, HERO_LOGO, LOADER, PURCHASE_BUTTON_DARK,
        PURCHASE_BUTTON_WHITE, WHITE_NAVBAR_LOGO,
    };

    fn rules() -> RuleSet {
        RuleSet::compile(&default_rules()).expect("built-in rules compile")
    }

    /// Assert `input` rewrites to exactly `expected`, and only `rule` fired.
    fn assert_rule_output(rule: &str, input: &str, expected: &str) {
        let rewrite = rules().apply(input);
        assert_eq!(rewrite.content, expected);
        let fired: Vec<&str> = rewrite.hits.iter().map(|hit| hit.name.as_str()).collect();
        assert_eq!(fired, vec![rule]);
    }

    #[test]
    fn rule_names_are_unique() {
        let specs = default_rules();
        let mut names: Vec<&str> = specs.iter().map(|spec| spec.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), specs.len());
    }

    #[test]
    fn replaces_title() {
        let rewrite = rules().apply("<title>Aquay - Webflow HTML Website Template</title>");
        assert_eq!(
            rewrite.content,
            "<title>Ramin Habibi - Luxury Real Estate</title>"
        );
    }

    #[test]
    fn replaces_meta_description() {
        assert_rule_output(
            "meta-description",
            r#"<meta content="Aquay is an elegant showcase for high-end property developments and real estate businesses including everything required to launch a tasteful web presence." name="description">"#,
            r#"<meta content="Ramin Habibi offers luxury real estate services and premium property consultations for discerning clients." name="description">"#,
        );
    }

    #[test]
    fn replaces_og_title() {
        assert_rule_output(
            "og-title",
            r#"<meta content="Aquay - Webflow HTML Website Template" property="og:title">"#,
            r#"<meta content="Ramin Habibi - Luxury Real Estate" property="og:title">"#,
        );
    }

    #[test]
    fn replaces_twitter_title() {
        assert_rule_output(
            "twitter-title",
            r#"<meta content="Aquay - Webflow HTML Website Template" property="twitter:title">"#,
            r#"<meta content="Ramin Habibi - Luxury Real Estate" property="twitter:title">"#,
        );
    }

    #[test]
    fn white_navbar_logo_gets_white_text() {
        assert_rule_output(
            "navbar-logo-white",
            WHITE_NAVBAR_LOGO,
            r#"<a id="w-node-_1fb68cae-1399-1683-4f37-a3e2705aa34a-705aa346" href="index.html" class="w-inline-block"><div class="logo-text" style="color: var(--white);">Ramin Habibi</div></a>"#,
        );
    }

    #[test]
    fn nested_white_navbar_logo_drops_parent_prefix() {
        assert_rule_output(
            "navbar-logo-white",
            r#"<a id="w-node-_1fb68cae-1399-1683-4f37-a3e2705aa34a-705aa346" href="../index.html" class="w-inline-block"><img src="../images/Aquay-Small-White.svg" alt=""></a>"#,
            r#"<a id="w-node-_1fb68cae-1399-1683-4f37-a3e2705aa34a-705aa346" href="index.html" class="w-inline-block"><div class="logo-text" style="color: var(--white);">Ramin Habibi</div></a>"#,
        );
    }

    #[test]
    fn replaces_hero_logo() {
        assert_rule_output(
            "hero-logo",
            HERO_LOGO,
            r#"<div class="hero-logo-text">Ramin Habibi</div>"#,
        );
    }

    #[test]
    fn replaces_footer_logo() {
        assert_rule_output(
            "footer-logo",
            FOOTER_LOGO,
            r#"<div class="hero-logo-text" style="color: var(--white); font-size: 32px;">Ramin Habibi</div>"#,
        );
    }

    #[test]
    fn replaces_greenwich_copy() {
        assert_rule_output(
            "greenwich-copy",
            "Nestled in the iconic heart of Greenwich, Aquay is an immersive sanctuary.",
            "Nestled in the iconic heart of Greenwich, this property is an immersive sanctuary.",
        );
    }

    #[test]
    fn nested_navbar_logo_links_to_bare_index() {
        let rewrite = rules().apply(DARK_NAVBAR_LOGO);
        assert_eq!(
            rewrite.content,
            r#"<a id="w-node-_5c6ae061-b7f3-3993-0d6f-68cf6ad547cd-6ad547c9" href="index.html" class="w-inline-block"><div class="logo-text">Ramin Habibi</div></a>"#
        );
    }

    #[test]
    fn removes_purchase_buttons_across_lines() {
        let page = format!("<nav>{PURCHASE_BUTTON_DARK}|{PURCHASE_BUTTON_WHITE}</nav>");
        let rewrite = rules().apply(&page);
        assert_eq!(rewrite.content, "<nav>|</nav>");
        assert!(!rewrite.content.contains("purchaseaquay"));
    }

    #[test]
    fn replaces_footer_copyright_with_any_shop_path() {
        let rewrite = rules().apply(FOOTER_COPYRIGHT);
        assert_eq!(
            rewrite.content,
            "Copyright © 2025 Ramin Habibi. All rights reserved."
        );
    }

    #[test]
    fn loader_keeps_spinner_only() {
        let rewrite = rules().apply(LOADER);
        assert_eq!(
            rewrite.content,
            r#"<div class="loading-container"><img src="images/loader.svg" loading="eager" alt="" class="loader"></div>"#
        );
    }

    #[test]
    fn leaves_asset_urls_alone() {
        let text = r#"<link href="https://cdn.example.com/aquay/Aquay.css" rel="stylesheet">"#;
        assert!(!rules().apply(text).changed(text));
    }
}
