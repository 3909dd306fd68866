use contracts::domain::common::DomainRecord;
use leptos::prelude::*;

/// Centralized state of the record detail modal.
///
/// The modal is open exactly while a record is selected. Closing drops the
/// record, so the next `open` starts from the new record only.
#[derive(Clone, Copy)]
pub struct DetailModalService {
    selected: RwSignal<Option<DomainRecord>>,
}

impl DetailModalService {
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(None),
        }
    }

    /// Show the modal for `record`
    pub fn open(&self, record: DomainRecord) {
        log::debug!("detail modal: open {} #{}", record.kind(), record.id());
        self.selected.set(Some(record));
    }

    /// Hide the modal
    pub fn close(&self) {
        if self.selected.with_untracked(Option::is_some) {
            log::debug!("detail modal: close");
            self.selected.set(None);
        }
    }

    /// Currently selected record (tracked)
    pub fn selected(&self) -> Option<DomainRecord> {
        self.selected.get()
    }
}

impl Default for DetailModalService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_detail_modal() -> DetailModalService {
    use_context::<DetailModalService>().expect("DetailModalService not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_material::seed_materials;
    use contracts::domain::a002_supplier::seed_suppliers;

    #[test]
    fn test_starts_closed() {
        Owner::new().with(|| {
            let modal = DetailModalService::new();
            assert!(modal.selected().is_none());
        });
    }

    #[test]
    fn test_reopen_shows_only_new_record() {
        Owner::new().with(|| {
            let modal = DetailModalService::new();
            let supplier = DomainRecord::from(seed_suppliers().remove(0));
            let material = DomainRecord::from(seed_materials().remove(0));

            modal.open(supplier.clone());
            assert_eq!(modal.selected(), Some(supplier));

            modal.close();
            assert!(modal.selected().is_none());

            modal.open(material.clone());
            let selected = modal.selected().unwrap();
            assert_eq!(selected.name(), material.name());
            assert_eq!(selected, material);
        });
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        Owner::new().with(|| {
            let modal = DetailModalService::new();
            modal.close();
            assert!(modal.selected().is_none());
        });
    }
}
