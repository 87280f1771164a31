//! Pending motion goals.
//!
//! The shared vocabulary between the serial layer, which enqueues work, and
//! the regulation loop, which consumes it. Executors own a [`GoalQueue`];
//! nothing here schedules anything.
use crate::static_queue::StaticQueue;
use crate::GOAL_QUEUE_CAPACITY;

/// One unit of motion work, tagged with the id handed back to the driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Goal {
    pub id: u16,
    pub kind: GoalKind,
}

impl Goal {
    pub fn new(id: u16, kind: GoalKind) -> Self {
        Self { id, kind }
    }
}

/// The queueable move orders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GoalKind {
    GoTo { x: f32, y: f32 },
    GoToWithAngle { x: f32, y: f32, angle: f32, direction: i32 },
    Rotate { angle: f32 },
    RotateModulo { angle: f32 },
    Pwm { left: i32, right: i32 },
}

pub type GoalQueue = StaticQueue<Goal, GOAL_QUEUE_CAPACITY>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serial::order::Executor;
    use crate::serial::parser::{OrderParser, OrderSet};
    use crate::serial::protocol::{all_orders, AsservExecutor};

    #[test]
    fn goals_drain_in_arrival_order() {
        let mut queue = GoalQueue::new();
        assert_eq!(queue.capacity(), crate::GOAL_QUEUE_CAPACITY);

        let first = Goal::new(1, GoalKind::GoTo { x: 1.0, y: 2.0 });
        let second = Goal::new(2, GoalKind::Rotate { angle: 90.0 });
        assert!(queue.push(first).is_ok());
        assert!(queue.push(second).is_ok());

        assert_eq!(queue.front(), Some(&first));
        assert_eq!(queue.back(), Some(&second));
        assert_eq!(queue.pop(), Some(first));
        assert_eq!(queue.pop(), Some(second));
        assert_eq!(queue.pop(), None);
    }

    /// Minimal board core: queues every queueable order, answers the id
    /// bookkeeping orders, ignores the rest.
    #[derive(Default)]
    struct Board {
        goals: GoalQueue,
        next_id: u16,
        emergency_stop: bool,
    }

    impl Board {
        fn enqueue(&mut self, kind: GoalKind) {
            self.next_id += 1;
            let _ = self.goals.push(Goal::new(self.next_id, kind));
        }
    }

    impl Executor for Board {
        type Reply = ();
    }

    impl AsservExecutor for Board {
        fn clean_goals(&mut self) {
            while self.goals.pop().is_some() {}
        }
        fn get_last_id(&mut self) {}
        fn halt(&mut self) {}
        fn kill_goal(&mut self) {
            self.goals.pop();
        }
        fn pause(&mut self) {}
        fn ping_ping(&mut self) {}
        fn reset_id(&mut self) {
            self.next_id = 0;
        }
        fn resume(&mut self) {}
        fn start(&mut self) {}
        fn who_am_i(&mut self) {}
        fn set_max_acc(&mut self, _acc: f32) {}
        fn set_all_pid(&mut self, _kp: f32, _ki: f32, _kd: f32) {}
        fn set_left_pid(&mut self, _kp: f32, _ki: f32, _kd: f32) {}
        fn set_right_pid(&mut self, _kp: f32, _ki: f32, _kd: f32) {}
        fn set_max_speed(&mut self, _speed: f32) {}
        fn get_coder(&mut self) {}
        fn get_pos(&mut self) {}
        fn get_pos_id(&mut self) {}
        fn get_speed(&mut self) {}
        fn get_target_speed(&mut self) {}
        fn go_to(&mut self, x: f32, y: f32) {
            self.enqueue(GoalKind::GoTo { x, y });
        }
        fn go_to_with_angle(&mut self, x: f32, y: f32, angle: f32, direction: i32) {
            self.enqueue(GoalKind::GoToWithAngle {
                x,
                y,
                angle,
                direction,
            });
        }
        fn set_pwm(&mut self, left: i32, right: i32) {
            self.enqueue(GoalKind::Pwm { left, right });
        }
        fn rotate(&mut self, angle: f32) {
            self.enqueue(GoalKind::Rotate { angle });
        }
        fn rotate_modulo(&mut self, angle: f32) {
            self.enqueue(GoalKind::RotateModulo { angle });
        }
        fn set_emergency_stop(&mut self, enable: u8) {
            self.emergency_stop = enable != 0;
        }
        fn set_pos(&mut self, _x: f32, _y: f32, _angle: f32) {}
        fn set_speed(&mut self, _linear: f32, _angular: f32) {}
    }

    #[test]
    fn serial_orders_feed_the_goal_queue() {
        let mut board = Board::default();
        let orders = all_orders::<Board>();
        debug_assert!(orders.opcodes_are_distinct());

        let mut parser = OrderParser::new(&mut board);
        assert_eq!(parser.parse_and_run(&orders, b"d;1.0;2.0;"), Some(()));
        assert_eq!(parser.parse_and_run(&orders, b"e;90.0;"), Some(()));
        assert_eq!(parser.parse_and_run(&orders, b"k;100;-100;"), Some(()));
        assert_eq!(parser.parse_and_run(&orders, b"A;1;"), Some(()));

        assert_eq!(board.goals.len(), 3);
        assert!(board.emergency_stop);
        assert_eq!(
            board.goals.pop(),
            Some(Goal::new(1, GoalKind::GoTo { x: 1.0, y: 2.0 }))
        );
        assert_eq!(
            board.goals.pop(),
            Some(Goal::new(2, GoalKind::Rotate { angle: 90.0 }))
        );
        assert_eq!(
            board.goals.pop(),
            Some(Goal::new(3, GoalKind::Pwm { left: 100, right: -100 }))
        );
    }

    #[test]
    fn state_machine_orders_manage_the_queue() {
        let mut board = Board::default();
        let orders = all_orders::<Board>();
        let mut parser = OrderParser::new(&mut board);

        assert_eq!(parser.parse_and_run(&orders, b"d;1.0;2.0;"), Some(()));
        assert_eq!(parser.parse_and_run(&orders, b"e;45.0;"), Some(()));
        assert_eq!(parser.parse_and_run(&orders, b"f;"), Some(()));
        assert_eq!(board.goals.len(), 1);

        let mut parser = OrderParser::new(&mut board);
        assert_eq!(parser.parse_and_run(&orders, b"d;3.0;4.0;"), Some(()));
        assert_eq!(parser.parse_and_run(&orders, b"g;"), Some(()));
        assert!(board.goals.is_empty());

        let mut parser = OrderParser::new(&mut board);
        assert_eq!(parser.parse_and_run(&orders, b"s;"), Some(()));
        assert_eq!(board.next_id, 0);
    }

    #[test]
    fn overflowing_goals_are_dropped_not_corrupted() {
        let mut board = Board::default();
        let orders = all_orders::<Board>();
        let mut parser = OrderParser::new(&mut board);

        for _ in 0..(crate::GOAL_QUEUE_CAPACITY + 2) {
            assert_eq!(parser.parse_and_run(&orders, b"e;10.0;"), Some(()));
        }
        assert!(board.goals.is_full());
        assert_eq!(board.goals.len(), crate::GOAL_QUEUE_CAPACITY);
        assert_eq!(
            board.goals.front(),
            Some(&Goal::new(1, GoalKind::Rotate { angle: 10.0 }))
        );
    }
}
