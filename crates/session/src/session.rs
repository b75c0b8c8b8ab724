//! Sheet session: initialization sequence and recompute on field edits.

use sheet_core::{
    Ability, AbilityScores, CharacterModifier, CharacterSheet, DerivedSheet, EffectiveScores,
    LEVEL_FIELD, SheetConfig, TraitCatalog, derive, parse_field,
};

use crate::error::SessionError;
use crate::form::FormFields;

/// One page session over a character sheet form.
///
/// The session owns the base scores. The form only ever shows adjusted
/// scores, and those are never fed back in as a base: on [`refresh`] a
/// `<stat>` field still holding the value this session wrote is treated as
/// unchanged, anything else is a new base score typed by the user.
///
/// [`refresh`]: SheetSession::refresh
#[derive(Clone, Debug)]
pub struct SheetSession {
    catalog: TraitCatalog,
    config: SheetConfig,
    sheet: CharacterSheet,
    derived: DerivedSheet,
}

impl SheetSession {
    /// Reads the form, derives every value and writes the results back.
    ///
    /// Runs the initialization sequence: trait modifiers for all six
    /// abilities, then all six modifiers, then proficiency, then the spell
    /// save DC when enabled.
    pub fn start<F: FormFields>(
        form: &mut F,
        catalog: TraitCatalog,
        config: SheetConfig,
    ) -> Result<Self, SessionError> {
        Self::start_with_modifiers(form, catalog, config, Vec::new())
    }

    /// Like [`start`](Self::start), with per-character modifiers that apply
    /// on top of the catalog's traits.
    pub fn start_with_modifiers<F: FormFields>(
        form: &mut F,
        catalog: TraitCatalog,
        config: SheetConfig,
        modifiers: Vec<CharacterModifier>,
    ) -> Result<Self, SessionError> {
        let mut sheet = read_sheet(form, &config, None).inspect_err(|e| {
            tracing::warn!("Rejected sheet input: {}", e);
        })?;
        sheet.modifiers = modifiers;
        tracing::debug!(
            "Starting sheet session: level {}, {} ancestries in catalog",
            sheet.level,
            catalog.len()
        );

        let derived = derive(&sheet, &catalog, &config);
        let session = Self {
            catalog,
            config,
            sheet,
            derived,
        };
        session.log_trait_grants();
        session.render(form);
        Ok(session)
    }

    /// Re-reads the form after user edits and recomputes from base scores.
    ///
    /// On error the previous state is kept and the form is left untouched.
    pub fn refresh<F: FormFields>(&mut self, form: &mut F) -> Result<&DerivedSheet, SessionError> {
        let previous = (&self.sheet, &self.derived.scores);
        let mut sheet = read_sheet(form, &self.config, Some(previous)).inspect_err(|e| {
            tracing::warn!("Rejected sheet edit: {}", e);
        })?;
        sheet.modifiers = self.sheet.modifiers.clone();

        for ability in Ability::ALL {
            let (old, new) = (self.sheet.scores.get(ability), sheet.scores.get(ability));
            if old != new {
                tracing::debug!("Base {} changed from {} to {}", ability, old, new);
            }
        }
        if self.sheet.level != sheet.level {
            tracing::debug!("Level changed from {} to {}", self.sheet.level, sheet.level);
        }

        self.sheet = sheet;
        self.recompute(form);
        Ok(&self.derived)
    }

    /// Replaces the per-character modifiers and recomputes.
    pub fn set_character_modifiers<F: FormFields>(
        &mut self,
        form: &mut F,
        modifiers: Vec<CharacterModifier>,
    ) -> &DerivedSheet {
        self.sheet.modifiers = modifiers;
        self.recompute(form);
        &self.derived
    }

    /// Sets a base score directly (bypassing the form) and recomputes.
    pub fn set_base_score<F: FormFields>(
        &mut self,
        form: &mut F,
        ability: Ability,
        score: i32,
    ) -> Result<&DerivedSheet, SessionError> {
        let score = self.config.score_bounds.check(ability.score_field(), score)?;
        self.sheet.set_score(ability, score);
        self.recompute(form);
        Ok(&self.derived)
    }

    pub fn derived(&self) -> &DerivedSheet {
        &self.derived
    }

    /// Current input record, with base (unadjusted) scores.
    pub fn sheet(&self) -> &CharacterSheet {
        &self.sheet
    }

    pub fn base_scores(&self) -> &AbilityScores {
        &self.sheet.scores
    }

    pub fn catalog(&self) -> &TraitCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    fn recompute<F: FormFields>(&mut self, form: &mut F) {
        self.derived = derive(&self.sheet, &self.catalog, &self.config);
        self.log_trait_grants();
        self.render(form);
    }

    fn log_trait_grants(&self) {
        for ability in Ability::ALL {
            for (ancestry, entry, delta) in self.catalog.modifiers_for(ability).iter() {
                tracing::info!("Ancestry trait \"{}\" grants {} to {}", ancestry, delta, ability);
                tracing::debug!("  from {}", entry.name);
            }
        }
        for modifier in &self.sheet.modifiers {
            tracing::info!(
                "Character modifier \"{}\" grants {} to {}",
                modifier.name,
                modifier.value,
                modifier.target
            );
        }
    }

    fn render<F: FormFields>(&self, form: &mut F) {
        for (field, value) in self.derived.output_fields() {
            form.write(field, value.to_string());
        }
        tracing::debug!(
            "Rendered sheet: proficiency {}, spell save DC {:?}",
            self.derived.proficiency_bonus,
            self.derived.spell_save_dc
        );
    }
}

/// Reads and validates all inputs, collecting every field error.
///
/// With `previous` set, a score field equal to the adjusted score last
/// displayed keeps the previous base score.
fn read_sheet<F: FormFields>(
    form: &F,
    config: &SheetConfig,
    previous: Option<(&CharacterSheet, &EffectiveScores)>,
) -> Result<CharacterSheet, SessionError> {
    let mut errors = Vec::new();
    let mut scores = AbilityScores::default();

    for ability in Ability::ALL {
        let field = ability.score_field();
        let raw = match parse_field(field, form.read(field)) {
            Ok(raw) => raw,
            Err(e) => {
                errors.push(e);
                continue;
            }
        };

        let unchanged = previous
            .filter(|(_, displayed)| displayed.get(ability) == raw)
            .map(|(sheet, _)| sheet.scores.get(ability));
        let base = match unchanged {
            Some(base) => Ok(base),
            None => config.score_bounds.check(field, raw),
        };
        match base {
            Ok(base) => scores.set(ability, base),
            Err(e) => errors.push(e),
        }
    }

    let level = parse_field(LEVEL_FIELD, form.read(LEVEL_FIELD))
        .and_then(|level| config.level_bounds.check(LEVEL_FIELD, level));
    let level = match level {
        Ok(level) => Some(level),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    match level {
        Some(level) if errors.is_empty() => Ok(CharacterSheet::new(scores, level)),
        _ => Err(SessionError::InvalidInput(errors)),
    }
}
