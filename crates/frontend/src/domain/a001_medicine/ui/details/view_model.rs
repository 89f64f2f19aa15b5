use crate::domain::a001_medicine::ui::list::model;
use contracts::domain::a001_medicine::{MedicineDraft, NewMedicine};
use leptos::prelude::*;

/// ViewModel of the "add medicine" form
#[derive(Clone, Copy)]
pub struct NewMedicineViewModel {
    pub form: RwSignal<MedicineDraft>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl NewMedicineViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(MedicineDraft::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn update(&self, change: impl FnOnce(&mut MedicineDraft)) {
        self.form.update(change);
        self.error.set(None);
    }

    pub fn save_command(&self, author: Option<String>, on_saved: Callback<()>) {
        let body = match NewMedicine::from_draft(&self.form.get_untracked(), author) {
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
                    log::info!("medicine created");
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    }
}

impl Default for NewMedicineViewModel {
    fn default() -> Self {
        Self::new()
    }
}
