use derive_more::Constructor;
use crate::creeps::creep_command::CreepCommand;
use crate::creeps::creep_info::CreepInfo;
use crate::creeps::orders::Orders;
use crate::geometry::position_utils::PositionUtils;
use crate::travel::travel_spec::TravelSpec;
use crate::world::world_view::{ContainerData, StorageData};

#[derive(Debug, Clone, Constructor)]
pub struct HaulerOrders {
    pub container: ContainerData,
    pub storage: StorageData,
    /// Distance between the storage and the source.
    pub distance: u32,
    /// Haulers with fewer than `distance + retire_margin` ticks to live are recycled.
    pub retire_margin: u32,
    /// Fraction of the store above which the hauler unloads.
    pub full_ratio: f32,
}

impl Orders for HaulerOrders {
    fn decide(&self, hauler: &CreepInfo) -> CreepCommand {
        // A hauler that would die on the way would lose its cargo.
        if hauler.dies_within(self.distance + self.retire_margin) {
            return CreepCommand::Recycle;
        }

        if hauler.carry_ratio() > self.full_ratio {
            return if hauler.pos.is_near(self.storage.pos) {
                CreepCommand::TransferAll(self.storage.id)
            } else {
                CreepCommand::TravelTo(TravelSpec::new(self.storage.pos, 1))
            };
        }

        if !hauler.pos.is_near(self.container.pos) {
            CreepCommand::TravelTo(TravelSpec::new(self.container.pos, 1))
        } else if self.container.energy > 0 {
            CreepCommand::Withdraw(self.container.id)
        } else {
            CreepCommand::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::creeps::creep_command::CreepCommand;
    use crate::creeps::creep_role::CreepRole::Hauler;
    use crate::creeps::orders::hauler_orders::HaulerOrders;
    use crate::creeps::orders::Orders;
    use crate::test_utils::{container_at, creep, pos, storage_at};
    use crate::travel::travel_spec::TravelSpec;

    fn orders(container_energy: u32) -> HaulerOrders {
        HaulerOrders::new(container_at(1, pos(40, 40), container_energy), storage_at(2, pos(10, 10)), 40, 30, 0.8)
    }

    #[test]
    fn test_hauler_retires_before_the_trip() {
        let hauler = creep("hauler1", Hauler, pos(10, 11), Some(60), 500, 500);
        assert_eq!(orders(1000).decide(&hauler), CreepCommand::Recycle);

        let hauler = creep("hauler1", Hauler, pos(10, 11), Some(70), 500, 500);
        assert_eq!(orders(1000).decide(&hauler), CreepCommand::TransferAll(orders(0).storage.id));
    }

    #[test]
    fn test_full_hauler_unloads_in_storage() {
        let hauler = creep("hauler1", Hauler, pos(39, 40), Some(1000), 450, 500);
        assert_eq!(
            orders(1000).decide(&hauler),
            CreepCommand::TravelTo(TravelSpec::new(pos(10, 10), 1))
        );
    }

    #[test]
    fn test_hauler_collects_from_container() {
        let far = creep("hauler1", Hauler, pos(10, 11), Some(1000), 0, 500);
        assert_eq!(orders(1000).decide(&far), CreepCommand::TravelTo(TravelSpec::new(pos(40, 40), 1)));

        let near = creep("hauler1", Hauler, pos(41, 41), Some(1000), 400, 500);
        assert_eq!(orders(1000).decide(&near), CreepCommand::Withdraw(orders(0).container.id));
        assert_eq!(orders(0).decide(&near), CreepCommand::Idle);
    }

    #[test]
    fn test_spawning_hauler_is_not_recycled() {
        let spawning = creep("hauler1", Hauler, pos(10, 11), None, 0, 500);
        assert_ne!(orders(0).decide(&spawning), CreepCommand::Recycle);
    }
}
