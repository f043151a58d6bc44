use tipdesk_shared::models::Pagination as PaginationEnvelope;
use yew::{Callback, Html, Properties, classes, function_component, html};

/// View-local pagination state, mapped from the API envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current: u32,
    pub page_size: u32,
    pub total: u64,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: 20,
            total: 0,
        }
    }
}

impl PageState {
    /// Number of pages at the current page size.
    #[must_use]
    pub fn page_count(&self) -> u32 {
        if self.page_size == 0 {
            return 1;
        }
        let count = self.total.div_ceil(u64::from(self.page_size));
        u32::try_from(count.max(1)).unwrap_or(u32::MAX)
    }
}

impl From<&PaginationEnvelope> for PageState {
    fn from(pagination: &PaginationEnvelope) -> Self {
        Self {
            current: pagination.current_page,
            page_size: pagination.per_page,
            total: pagination.total,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page: PageState,
    pub on_change: Callback<u32>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let page = props.page;
    let count = page.page_count();

    let button = |target: u32, label: Html, active: bool| {
        let on_change = props.on_change.clone();
        let disabled = props.disabled || active || target < 1 || target > count;
        let onclick = Callback::from(move |_| on_change.emit(target));
        html! {
            <button
                class={classes!("join-item", "btn", "btn-sm", if active { "btn-active" } else { "" })}
                {disabled}
                {onclick}
            >
                {label}
            </button>
        }
    };

    html! {
        <div class="join">
            { button(page.current.saturating_sub(1), html! { "«" }, false) }
            { for (1..=count).map(|number| {
                button(number, html! { number }, number == page.current)
            }) }
            { button(page.current + 1, html! { "»" }, false) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_maps_exactly() {
        let envelope = PaginationEnvelope {
            current_page: 2,
            per_page: 20,
            total: 57,
        };
        let state = PageState::from(&envelope);

        assert_eq!(
            state,
            PageState {
                current: 2,
                page_size: 20,
                total: 57,
            }
        );
    }

    #[test]
    fn test_page_count_rounds_up() {
        let state = PageState {
            current: 2,
            page_size: 20,
            total: 57,
        };
        assert_eq!(state.page_count(), 3);
    }

    #[test]
    fn test_empty_listing_has_one_page() {
        assert_eq!(PageState::default().page_count(), 1);
    }
}
