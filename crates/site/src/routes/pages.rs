//! Content page route handlers: home, calendar, fundraisers, sports, contact.
//!
//! Each handler selects its page in the visitor session and renders from the
//! read-only content registries.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use chrono::NaiveDate;
use rockets_hub_core::{Event, Fundraiser, Page, SiteSession, SportsFixture, group_by_month};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::models::{load_site_session, store_site_session};
use crate::routes::layout::LayoutView;
use crate::state::AppState;

/// Query marker set on the redirect that follows a cart action.
///
/// A page request carrying it re-renders the current page as the action
/// left it. Any other page request (a nav click, a typed URL) is a page
/// selection and closes the cart overlay.
pub const STAY_MARKER: &str = "stay";

/// Query parameters shared by the content pages.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Present on redirects back from a cart action.
    pub stay: Option<String>,
}

/// Select `page` for this visitor and persist the session.
pub(crate) async fn visit(session: &Session, page: Page, stay: bool) -> Result<SiteSession> {
    let mut site = load_site_session(session).await?;
    select_page(&mut site, page, stay);
    store_site_session(session, &site).await?;
    Ok(site)
}

/// Select `page`, closing the cart overlay, unless this is a redirect back
/// to the page that is already current.
pub(crate) fn select_page(site: &mut SiteSession, page: Page, stay: bool) {
    if stay && site.page() == page {
        return;
    }
    site.set_page(page);
    tracing::debug!(page = %page, "Page selected");
}

// =============================================================================
// View Types
// =============================================================================

/// Event display data for templates.
#[derive(Clone)]
pub struct EventView {
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub category: &'static str,
    pub tone: &'static str,
    pub description: String,
}

impl From<&Event> for EventView {
    fn from(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            date: event.date,
            time: event.time.clone(),
            location: event.location.clone(),
            category: event.category.label(),
            tone: event.category.tone().as_str(),
            description: event.description.clone(),
        }
    }
}

/// A month of events.
#[derive(Clone)]
pub struct MonthView {
    pub label: String,
    pub events: Vec<EventView>,
}

/// Fundraiser display data for templates.
#[derive(Clone)]
pub struct FundraiserView {
    pub title: String,
    pub date: NaiveDate,
    pub goal: String,
    pub status: &'static str,
    pub tone: &'static str,
    pub details: String,
}

impl From<&Fundraiser> for FundraiserView {
    fn from(fundraiser: &Fundraiser) -> Self {
        Self {
            title: fundraiser.title.clone(),
            date: fundraiser.date,
            goal: fundraiser.goal.display_whole(),
            status: fundraiser.status.label(),
            tone: fundraiser.status.tone().as_str(),
            details: fundraiser.details.clone(),
        }
    }
}

/// Sports fixture display data for templates.
#[derive(Clone)]
pub struct FixtureView {
    pub sport: String,
    pub matchup: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub level: &'static str,
}

impl From<&SportsFixture> for FixtureView {
    fn from(fixture: &SportsFixture) -> Self {
        Self {
            sport: fixture.sport.clone(),
            matchup: fixture.matchup.clone(),
            date: fixture.date,
            time: fixture.time.clone(),
            location: fixture.location.clone(),
            level: fixture.level.label(),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub layout: LayoutView,
    pub tagline: String,
    pub locale_line: String,
    pub next_event: Option<EventView>,
}

/// Calendar page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/calendar.html")]
pub struct CalendarTemplate {
    pub layout: LayoutView,
    pub months: Vec<MonthView>,
}

/// Fundraisers page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/fundraisers.html")]
pub struct FundraisersTemplate {
    pub layout: LayoutView,
    pub fundraisers: Vec<FundraiserView>,
}

/// Sports schedule page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/sports.html")]
pub struct SportsTemplate {
    pub layout: LayoutView,
    pub fixtures: Vec<FixtureView>,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate {
    pub layout: LayoutView,
    pub phone: String,
    pub email: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the home page.
#[instrument(skip(state, session))]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PageQuery>,
) -> Result<HomeTemplate> {
    let site = visit(&session, Page::Home, params.stay.is_some()).await?;
    let content = state.content();

    Ok(HomeTemplate {
        layout: LayoutView::new(content, &site),
        tagline: content.profile.tagline.clone(),
        locale_line: content.profile.locale_line.clone(),
        next_event: content
            .events
            .iter()
            .min_by_key(|e| e.date)
            .map(EventView::from),
    })
}

/// Display events grouped by month.
#[instrument(skip(state, session))]
pub async fn calendar(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PageQuery>,
) -> Result<CalendarTemplate> {
    let site = visit(&session, Page::Calendar, params.stay.is_some()).await?;
    let content = state.content();

    let months = group_by_month(&content.events)
        .into_iter()
        .map(|group| MonthView {
            label: group.label,
            events: group.items.into_iter().map(EventView::from).collect(),
        })
        .collect();

    Ok(CalendarTemplate {
        layout: LayoutView::new(content, &site),
        months,
    })
}

/// Display the fundraiser list.
#[instrument(skip(state, session))]
pub async fn fundraisers(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PageQuery>,
) -> Result<FundraisersTemplate> {
    let site = visit(&session, Page::Fundraisers, params.stay.is_some()).await?;
    let content = state.content();

    Ok(FundraisersTemplate {
        layout: LayoutView::new(content, &site),
        fundraisers: content.fundraisers.iter().map(FundraiserView::from).collect(),
    })
}

/// Display the sports schedule.
#[instrument(skip(state, session))]
pub async fn sports(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PageQuery>,
) -> Result<SportsTemplate> {
    let site = visit(&session, Page::Sports, params.stay.is_some()).await?;
    let content = state.content();

    Ok(SportsTemplate {
        layout: LayoutView::new(content, &site),
        fixtures: content.sports.iter().map(FixtureView::from).collect(),
    })
}

/// Display contact details. The page has no form to submit.
#[instrument(skip(state, session))]
pub async fn contact(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PageQuery>,
) -> Result<ContactTemplate> {
    let site = visit(&session, Page::Contact, params.stay.is_some()).await?;
    let content = state.content();

    Ok(ContactTemplate {
        layout: LayoutView::new(content, &site),
        phone: content.profile.phone.clone(),
        email: content.profile.email.clone(),
    })
}
