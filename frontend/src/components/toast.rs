use gloo_timers::callback::Timeout;
use shared::{Toast, ToastKind};
use std::rc::Rc;
use yew::prelude::*;

const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Clone, PartialEq)]
struct ToastEntry {
    id: u64,
    toast: Toast,
}

#[derive(Default, PartialEq)]
pub struct ToastList {
    entries: Vec<ToastEntry>,
    next_id: u64,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u64),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut entries = self.entries.clone();
        let mut next_id = self.next_id;
        match action {
            ToastAction::Push(toast) => {
                next_id += 1;
                entries.push(ToastEntry { id: next_id, toast });
            }
            ToastAction::Dismiss(id) => entries.retain(|entry| entry.id != id),
        }
        Rc::new(Self { entries, next_id })
    }
}

/// Handle used by pages and components to raise toasts.
#[derive(Clone, PartialEq)]
pub struct Toaster(UseReducerDispatcher<ToastList>);

impl Toaster {
    pub fn show(&self, toast: Toast) {
        self.0.dispatch(ToastAction::Push(toast));
    }
}

#[hook]
pub fn use_toaster() -> Option<Toaster> {
    use_context::<Toaster>()
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub children: Html,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let toasts = use_reducer(ToastList::default);
    let toaster = Toaster(toasts.dispatcher());

    html! {
        <ContextProvider<Toaster> context={toaster}>
            { props.children.clone() }
            <div class="toast-stack" aria-live="polite">
                { for toasts.entries.iter().map(|entry| html! {
                    <ToastItem
                        key={entry.id.to_string()}
                        id={entry.id}
                        toast={entry.toast.clone()}
                        dispatcher={toasts.dispatcher()}
                    />
                })}
            </div>
        </ContextProvider<Toaster>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    id: u64,
    toast: Toast,
    dispatcher: UseReducerDispatcher<ToastList>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let dispatcher = props.dispatcher.clone();
        use_effect_with(props.id, move |id| {
            let id = *id;
            let timeout = Timeout::new(TOAST_LIFETIME_MS, move || {
                dispatcher.dispatch(ToastAction::Dismiss(id));
            });
            move || drop(timeout)
        });
    }

    let on_close = {
        let dispatcher = props.dispatcher.clone();
        let id = props.id;
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let icon = match props.toast.kind {
        ToastKind::Success => "fa-solid fa-circle-check",
        ToastKind::Warning => "fa-solid fa-triangle-exclamation",
        ToastKind::Error => "fa-solid fa-circle-xmark",
        ToastKind::Info => "fa-solid fa-circle-info",
    };
    let kind: &'static str = props.toast.kind.into();

    html! {
        <div class={classes!("toast", format!("toast-{}", kind))} role="status">
            <i class={icon}></i>
            <span class="toast-message">{ &props.toast.message }</span>
            <button class="toast-close" onclick={on_close} title="ปิด">
                <i class="fa-solid fa-times"></i>
            </button>
        </div>
    }
}
