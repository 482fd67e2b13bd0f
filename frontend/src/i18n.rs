use serde::Deserialize;

use crate::utils::api::Api;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Vi,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Vi];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Vi => "vi",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "vi" => Some(Locale::Vi),
            _ => None,
        }
    }

    /// Unknown route segments render the default locale instead of a 404.
    pub fn from_route(segment: &str) -> Self {
        Self::from_code(segment).unwrap_or_default()
    }

    pub fn short_label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Vi => "VI",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Vi => "Tiếng Việt",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Messages {
    pub header: HeaderMessages,
    pub hero: HeroMessages,
    pub campaign: Campaign,
    pub story: StoryMessages,
    pub rewards: RewardsMessages,
    #[serde(default)]
    pub stretch_goals: Option<StretchGoalsMessages>,
    #[serde(default)]
    pub team: Option<TeamMessages>,
    pub faq: FaqMessages,
    pub footer: FooterMessages,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HeaderMessages {
    pub logo: String,
    pub nav: NavLabels,
    pub cta: String,
    pub language: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavLabels {
    pub story: String,
    pub rewards: String,
    pub faq: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HeroMessages {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub pledged: String,
    pub goal: String,
    pub backers: String,
    #[serde(default)]
    pub days_left: Option<String>,
    pub percent_funded: f64,
    #[serde(default)]
    pub status: Option<String>,
    pub labels: CampaignLabels,
    #[serde(default)]
    pub meta: CampaignMeta,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignLabels {
    pub pledged: String,
    pub goal: String,
    pub backers: String,
    pub days_left: String,
}

#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignMeta {
    pub badge: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub last_updated_label: Option<String>,
    pub last_updated_value: Option<String>,
    pub funding_period: Option<FundingPeriod>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FundingPeriod {
    pub title: String,
    pub start: String,
    pub end: String,
    pub duration: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StoryMessages {
    pub title: String,
    pub founder: Founder,
    pub problem: TitledText,
    pub solution: TitledText,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Founder {
    pub name: String,
    pub role: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TitledText {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RewardsMessages {
    pub title: String,
    pub subtitle: String,
    pub tiers: Vec<Reward>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: String,
    pub title: String,
    pub price: String,
    #[serde(default)]
    pub original_price: Option<String>,
    pub description: String,
    pub includes: Vec<String>,
    pub delivery: String,
    pub backers: u32,
    #[serde(default)]
    pub limited: bool,
    #[serde(default)]
    pub remaining: Option<u32>,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StretchGoalsMessages {
    pub title: String,
    pub subtitle: String,
    pub current_amount: String,
    pub goals: Vec<StretchGoal>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StretchGoal {
    pub amount: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TeamMessages {
    pub title: String,
    pub subtitle: String,
    pub members: Vec<TeamMember>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub position: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FaqMessages {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub questions: Vec<FaqEntry>,
    #[serde(default)]
    pub support: Option<SupportMessages>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportMessages {
    pub title: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub hours_title: String,
    pub hours: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterMessages {
    pub description: String,
    pub newsletter: NewsletterMessages,
    pub quick_links: QuickLinks,
    pub contact: ContactMessages,
    pub language: String,
    pub copyright: String,
    pub legal: LegalMessages,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NewsletterMessages {
    pub title: String,
    pub placeholder: String,
    pub subscribe: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct QuickLinks {
    pub title: String,
    pub links: Vec<FooterLink>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FooterLink {
    pub text: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactMessages {
    pub title: String,
    pub email: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LegalMessages {
    pub privacy: String,
    pub terms: String,
    pub cookies: String,
}

/// Fetches the catalog for `locale` from the server.
pub async fn fetch_messages(locale: Locale) -> Result<Messages, String> {
    let response = Api::get(&format!("/api/messages/{}", locale.code()))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch {} messages: {}", locale.code(), e))?;
    if !response.ok() {
        return Err(format!(
            "Messages request for {} failed with status {}",
            locale.code(),
            response.status()
        ));
    }
    response
        .json::<Messages>()
        .await
        .map_err(|e| format!("Invalid {} messages: {}", locale.code(), e))
}
