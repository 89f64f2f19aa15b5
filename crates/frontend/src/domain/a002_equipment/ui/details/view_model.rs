use crate::domain::a002_equipment::ui::list::model;
use contracts::domain::a002_equipment::{EquipmentDraft, NewEquipment};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct NewEquipmentViewModel {
    pub form: RwSignal<EquipmentDraft>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl NewEquipmentViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(EquipmentDraft {
                required_quantity: 1,
                ..Default::default()
            }),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn update(&self, change: impl FnOnce(&mut EquipmentDraft)) {
        self.form.update(change);
        self.error.set(None);
    }

    pub fn save_command(&self, author: Option<String>, on_saved: Callback<()>) {
        let body = match NewEquipment::from_draft(&self.form.get_untracked(), author) {
            Ok(body) => body,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::create(body).await {
                Ok(()) => {
                    log::info!("equipment created");
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    }
}

impl Default for NewEquipmentViewModel {
    fn default() -> Self {
        Self::new()
    }
}
