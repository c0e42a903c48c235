// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Per-op mutation helpers used by `apply_ops`.
/// Keeps `ops::mod` focused on public op types and orchestration.
fn apply_op(
    document: &mut AppDocument,
    op: &DocOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match op {
        DocOp::AddMap { map } => {
            if document.map(map.map_id()).is_some() {
                return Err(ApplyError::AlreadyExists {
                    kind: EntityKind::Map,
                    id: map.map_id().to_string(),
                });
            }
            document.maps_mut().push(map.clone());
            delta.record_added(EntityRef::Map(map.map_id().clone()));
            Ok(())
        }
        DocOp::SetMapImage { map_id, image } => {
            let Some(map) = document.map_mut(map_id) else {
                delta.record_missed(EntityRef::Map(map_id.clone()));
                return Ok(());
            };
            map.set_image(image.clone());
            delta.record_updated(EntityRef::Map(map_id.clone()));
            Ok(())
        }
        DocOp::AddStrategy { map_id, strategy } => {
            let Some(map) = document.map_mut(map_id) else {
                delta.record_missed(EntityRef::Map(map_id.clone()));
                return Ok(());
            };
            if map.strategy(strategy.strategy_id()).is_some() {
                return Err(ApplyError::AlreadyExists {
                    kind: EntityKind::Strategy,
                    id: strategy.strategy_id().to_string(),
                });
            }
            map.strategies_mut().push(strategy.clone());
            delta.record_added(EntityRef::Strategy {
                map_id: map_id.clone(),
                strategy_id: strategy.strategy_id().clone(),
            });
            Ok(())
        }
        DocOp::RemoveStrategy {
            map_id,
            strategy_id,
        } => {
            let Some(map) = document.map_mut(map_id) else {
                delta.record_missed(EntityRef::Map(map_id.clone()));
                return Ok(());
            };
            let entity = EntityRef::Strategy {
                map_id: map_id.clone(),
                strategy_id: strategy_id.clone(),
            };
            let before = map.strategies().len();
            map.strategies_mut().retain(|s| s.strategy_id() != strategy_id);
            if map.strategies().len() == before {
                delta.record_missed(entity);
            } else {
                delta.record_removed(entity);
            }
            Ok(())
        }
        DocOp::AddUtility { map_id, utility } => {
            let Some(map) = document.map_mut(map_id) else {
                delta.record_missed(EntityRef::Map(map_id.clone()));
                return Ok(());
            };
            if map.utility(utility.utility_id()).is_some() {
                return Err(ApplyError::AlreadyExists {
                    kind: EntityKind::Utility,
                    id: utility.utility_id().to_string(),
                });
            }
            map.utilities_mut().push(utility.clone());
            delta.record_added(EntityRef::Utility {
                map_id: map_id.clone(),
                utility_id: utility.utility_id().clone(),
            });
            Ok(())
        }
        DocOp::RemoveUtility { map_id, utility_id } => {
            let Some(map) = document.map_mut(map_id) else {
                delta.record_missed(EntityRef::Map(map_id.clone()));
                return Ok(());
            };
            let entity = EntityRef::Utility {
                map_id: map_id.clone(),
                utility_id: utility_id.clone(),
            };
            let before = map.utilities().len();
            map.utilities_mut().retain(|u| u.utility_id() != utility_id);
            if map.utilities().len() == before {
                delta.record_missed(entity);
            } else {
                delta.record_removed(entity);
            }
            Ok(())
        }
        DocOp::SetCurrentMap { map_id } => {
            // Not validated: a pointer to an unknown map is stored as given.
            document.set_current_map_id(map_id.clone());
            delta.record_updated(EntityRef::CurrentMap);
            Ok(())
        }
    }
}
