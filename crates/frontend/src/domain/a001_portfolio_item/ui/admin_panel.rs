use contracts::domain::a001_portfolio_item::aggregate::NewPortfolioItem;
use contracts::enums::PortfolioCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_portfolio_item::hook::PortfolioHook;
use crate::shared::data::StoreError;
use crate::shared::icons::icon;
use crate::shared::toast::{use_toast, ToastService};
use crate::system::auth::context::{do_logout, use_auth, LOGOUT_SUCCESS};

pub const ADD_SUCCESS: &str = "Portfolio Event Berhasil Ditambahkan!";
pub const ADD_FAILED: &str = "Gagal menambahkan portfolio";

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// ViewModel for the add-portfolio form
#[derive(Clone, Copy)]
pub struct AdminPanelViewModel {
    pub title: RwSignal<String>,
    pub category: RwSignal<String>,
    pub thumbnail: RwSignal<String>,
    pub video_url: RwSignal<String>,
    pub views: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl AdminPanelViewModel {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            category: RwSignal::new(PortfolioCategory::Esports.display_name().to_string()),
            thumbnail: RwSignal::new(String::new()),
            video_url: RwSignal::new(String::new()),
            views: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn to_item(&self) -> NewPortfolioItem {
        NewPortfolioItem {
            title: self.title.get_untracked(),
            category: self.category.get_untracked(),
            thumbnail: self.thumbnail.get_untracked(),
            video_url: optional(self.video_url.get_untracked()),
            views: optional(self.views.get_untracked()),
        }
    }

    pub fn reset(&self) {
        self.title.set(String::new());
        self.thumbnail.set(String::new());
        self.video_url.set(String::new());
        self.views.set(String::new());
        self.error.set(None);
    }

    /// Validate locally, then write through the hook
    pub fn save_command(&self, portfolio: PortfolioHook, toast: ToastService) {
        if self.saving.get_untracked() {
            return;
        }
        let item = self.to_item();
        if let Err(e) = item.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }

        self.error.set(None);
        self.saving.set(true);
        let vm = *self;
        spawn_local(async move {
            match portfolio.add(item).await {
                Ok(id) => {
                    log::info!("Portfolio item {} created", id);
                    toast.success(ADD_SUCCESS);
                    vm.reset();
                }
                Err(e) => {
                    log::error!("Add portfolio failed: {}", e);
                    if let StoreError::Invalid(reason) = &e {
                        vm.error.set(Some(reason.to_string()));
                    }
                    toast.error(ADD_FAILED);
                }
            }
            vm.saving.set(false);
        });
    }
}

impl Default for AdminPanelViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Floating admin panel: add portfolio items, leave admin mode
#[component]
pub fn AdminPanel() -> impl IntoView {
    let portfolio = use_context::<PortfolioHook>().expect("PortfolioHook not provided in context");
    let toast = use_toast();
    let (_, set_auth_state) = use_auth();
    let vm = AdminPanelViewModel::new();
    let collapsed = RwSignal::new(false);
    let disabled = Signal::derive(move || vm.saving.get());

    let on_logout = move |_: leptos::ev::MouseEvent| {
        do_logout(set_auth_state);
        toast.success(LOGOUT_SUCCESS);
    };

    view! {
        <aside class="admin-panel" class:admin-panel--collapsed=move || collapsed.get()>
            <div class="admin-panel__header">
                <button
                    class="admin-panel__title"
                    on:click=move |_| collapsed.update(|c| *c = !*c)
                >
                    {icon("plus")}
                    <span>"Admin Panel"</span>
                </button>
                <Button appearance=ButtonAppearance::Subtle on_click=on_logout>
                    {icon("logout")}
                </Button>
            </div>

            <Show when=move || !collapsed.get()>
                <form
                    class="admin-panel__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        vm.save_command(portfolio, toast);
                    }
                >
                    {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Judul Event"</Label>
                        <Input value=vm.title placeholder="Grand Final MPL Malang" disabled=disabled />
                    </div>

                    <div class="form__group">
                        <Label>"Kategori"</Label>
                        <Select value=vm.category>
                            {PortfolioCategory::all()
                                .into_iter()
                                .map(|c| view! { <option value=c.display_name()>{c.display_name()}</option> })
                                .collect_view()}
                        </Select>
                    </div>

                    <div class="form__group">
                        <Label>"URL Thumbnail"</Label>
                        <Input value=vm.thumbnail placeholder="https://..." disabled=disabled />
                    </div>

                    <div class="form__group">
                        <Label>"URL Video (opsional)"</Label>
                        <Input value=vm.video_url placeholder="https://youtube.com/..." disabled=disabled />
                    </div>

                    <div class="form__group">
                        <Label>"Views (opsional)"</Label>
                        <Input value=vm.views placeholder="1.2K" disabled=disabled />
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        button_type=ButtonType::Submit
                        disabled=disabled
                    >
                        {move || if vm.saving.get() { "Menyimpan..." } else { "Tambah Portfolio" }}
                    </Button>
                </form>
            </Show>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_trims_blank_to_none() {
        assert_eq!(optional("   ".into()), None);
        assert_eq!(optional(" 1.2K ".into()), Some("1.2K".into()));
    }
}
